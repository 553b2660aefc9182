use crate::models::{Activity, Catalog};
use std::fmt::Write;

pub const PLACEHOLDER_OPTION: &str = r#"<option value="">-- Select an activity --</option>"#;

pub const INITIALS_DELIMITERS: [char; 4] = ['.', '-', '_', ' '];

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub fn initials(identifier: &str) -> String {
    let local = identifier.split('@').next().unwrap_or_default();
    let parts: Vec<&str> = local
        .split(INITIALS_DELIMITERS)
        .filter(|part| !part.is_empty())
        .collect();

    let picked: Vec<char> = match parts.as_slice() {
        [] => Vec::new(),
        [only] => only.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    };

    picked.into_iter().flat_map(char::to_uppercase).take(2).collect()
}

// Regex character class the page script splits on, built from the same set.
pub fn initials_split_pattern() -> String {
    let class: String = INITIALS_DELIMITERS
        .iter()
        .map(|ch| match ch {
            '-' | '\\' | ']' | '^' => format!("\\{ch}"),
            other => other.to_string(),
        })
        .collect();
    format!("[{class}]+")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Open(i64),
    Full,
    Over(i64),
}

impl Availability {
    pub fn of(activity: &Activity) -> Self {
        match activity.spots_left() {
            n if n > 0 => Self::Open(n),
            0 => Self::Full,
            n => Self::Over(-n),
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Open(1) => "1 spot left".to_string(),
            Self::Open(n) => format!("{n} spots left"),
            Self::Full => "Full".to_string(),
            Self::Over(n) => format!("Over capacity by {n}"),
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            Self::Open(_) => "availability",
            Self::Full => "availability full",
            Self::Over(_) => "availability over",
        }
    }
}

pub fn render_activity(name: &str, activity: &Activity) -> String {
    let name_html = escape_html(name);
    let schedule = if activity.schedule.is_empty() { "TBD" } else { &activity.schedule };
    let availability = Availability::of(activity);

    let mut card = String::new();
    let _ = write!(
        card,
        r#"<div class="activity-card"><h4>{name_html}</h4><p>{}</p><p><strong>Schedule:</strong> {}</p><p><strong>Availability:</strong> <span class="{}">{}</span></p><div class="participants-section"><h5>Participants</h5>"#,
        escape_html(&activity.description),
        escape_html(schedule),
        availability.css_class(),
        availability.label(),
    );

    if activity.participants.is_empty() {
        card.push_str(r#"<p class="info">No participants yet</p>"#);
    } else {
        card.push_str(r#"<ul class="participants-list">"#);
        for participant in &activity.participants {
            let email = escape_html(participant);
            let _ = write!(
                card,
                r#"<li class="participant-item" data-email="{email}" data-activity="{name_html}"><span class="participant-badge">{}</span><span class="participant-email">{email}</span><button type="button" class="participant-delete" aria-label="Remove {email}">&#10006;</button></li>"#,
                escape_html(&initials(participant)),
            );
        }
        card.push_str("</ul>");
    }

    card.push_str("</div></div>");
    card
}

pub fn render_cards(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|(name, activity)| render_activity(name, activity))
        .collect()
}

pub fn render_options(catalog: &Catalog) -> String {
    let mut options = String::from(PLACEHOLDER_OPTION);
    for name in catalog.keys() {
        let name = escape_html(name);
        let _ = write!(options, r#"<option value="{name}">{name}</option>"#);
    }
    options
}
