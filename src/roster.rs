use crate::models::Catalog;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
}

pub fn signup(catalog: &mut Catalog, name: &str, email: &str) -> Result<String, RosterError> {
    let email = normalize_email(email)?;
    let activity = catalog.get_mut(name).ok_or(RosterError::ActivityNotFound)?;

    if activity.participants.iter().any(|p| p.trim() == email) {
        return Err(RosterError::AlreadySignedUp);
    }
    if activity.spots_left() <= 0 {
        return Err(RosterError::ActivityFull);
    }

    activity.participants.push(email.to_string());
    Ok(format!("Signed up {email} for {name}"))
}

pub fn unregister(catalog: &mut Catalog, name: &str, email: &str) -> Result<String, RosterError> {
    let email = normalize_email(email)?;
    let activity = catalog.get_mut(name).ok_or(RosterError::ActivityNotFound)?;

    let index = activity
        .participants
        .iter()
        .position(|p| p.trim() == email)
        .ok_or(RosterError::NotRegistered)?;
    activity.participants.remove(index);

    Ok(format!("Unregistered {email} from {name}"))
}

pub fn normalize_catalog(catalog: &mut Catalog) {
    for activity in catalog.values_mut() {
        activity.participants = activity
            .participants
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
    }
}

fn normalize_email(email: &str) -> Result<&str, RosterError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(RosterError::MissingEmail);
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_catalog, Activity};

    #[test]
    fn signup_appends_participant() {
        let mut catalog = default_catalog();
        let message = signup(&mut catalog, "Chess Club", "jane.doe@mergington.edu").unwrap();
        assert_eq!(message, "Signed up jane.doe@mergington.edu for Chess Club");
        let participants = &catalog["Chess Club"].participants;
        assert_eq!(participants.last().map(String::as_str), Some("jane.doe@mergington.edu"));
    }

    #[test]
    fn signup_twice_is_rejected() {
        let mut catalog = default_catalog();
        signup(&mut catalog, "Chess Club", "jane@mergington.edu").unwrap();
        let err = signup(&mut catalog, "Chess Club", " jane@mergington.edu ").unwrap_err();
        assert_eq!(err, RosterError::AlreadySignedUp);
    }

    #[test]
    fn signup_rejects_unknown_activity_and_blank_email() {
        let mut catalog = default_catalog();
        assert_eq!(
            signup(&mut catalog, "Knitting", "a@b.c").unwrap_err(),
            RosterError::ActivityNotFound
        );
        assert_eq!(
            signup(&mut catalog, "Chess Club", "   ").unwrap_err(),
            RosterError::MissingEmail
        );
    }

    #[test]
    fn signup_rejects_full_activity() {
        let mut catalog = Catalog::new();
        catalog.insert("Tiny".to_string(), Activity::new("", "", 1, &["a@x.org"]));
        assert_eq!(
            signup(&mut catalog, "Tiny", "b@x.org").unwrap_err(),
            RosterError::ActivityFull
        );
        assert_eq!(catalog["Tiny"].participants.len(), 1);
    }

    #[test]
    fn unregister_keeps_remaining_order() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Band".to_string(),
            Activity::new("", "", 5, &["a@x.org", "b@x.org", "c@x.org"]),
        );
        let message = unregister(&mut catalog, "Band", "b@x.org").unwrap();
        assert_eq!(message, "Unregistered b@x.org from Band");
        assert_eq!(catalog["Band"].participants, vec!["a@x.org", "c@x.org"]);

        assert_eq!(
            unregister(&mut catalog, "Band", "b@x.org").unwrap_err(),
            RosterError::NotRegistered
        );
    }

    #[test]
    fn unregister_rejects_unknown_activity_and_blank_email() {
        let mut catalog = default_catalog();
        assert_eq!(
            unregister(&mut catalog, "Knitting", "a@x.org").unwrap_err(),
            RosterError::ActivityNotFound
        );
        assert_eq!(
            unregister(&mut catalog, "Chess Club", "").unwrap_err(),
            RosterError::MissingEmail
        );
    }

    #[test]
    fn padded_participant_can_be_removed() {
        let mut catalog = Catalog::new();
        catalog.insert("Band".to_string(), Activity::new("", "", 5, &[" pad@x.org "]));
        assert_eq!(
            signup(&mut catalog, "Band", "pad@x.org").unwrap_err(),
            RosterError::AlreadySignedUp
        );
        unregister(&mut catalog, "Band", " pad@x.org ").unwrap();
        assert!(catalog["Band"].participants.is_empty());
    }

    #[test]
    fn normalize_trims_and_drops_blank_participants() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Band".to_string(),
            Activity::new("", "", 5, &[" a@x.org", "", "   ", "b@x.org "]),
        );
        normalize_catalog(&mut catalog);
        assert_eq!(catalog["Band"].participants, vec!["a@x.org", "b@x.org"]);
    }
}
