use crate::board::{initials_split_pattern, render_cards, render_options};
use crate::models::Catalog;
use std::time::Duration;

pub const NOTICE_TTL: Duration = Duration::from_secs(5);

pub fn render_index(catalog: &Catalog) -> String {
    let cards = if catalog.is_empty() {
        r#"<p class="info">No activities available.</p>"#.to_string()
    } else {
        render_cards(catalog)
    };

    INDEX_HTML
        .replace("{{NOTICE_MS}}", &NOTICE_TTL.as_millis().to_string())
        .replace("{{INITIALS_SPLIT}}", &initials_split_pattern())
        .replace("{{OPTIONS}}", &render_options(catalog))
        .replace("{{CARDS}}", &cards)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mergington High School Activities</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      --ok: #2d7a4b;
      --err: #c63b2b;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h3 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 24px;
      align-items: start;
    }

    #activities-list {
      display: grid;
      gap: 16px;
    }

    .activity-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .activity-card h4 {
      margin: 0 0 8px;
      color: var(--accent-2);
      font-size: 1.1rem;
    }

    .activity-card p {
      margin: 6px 0;
    }

    .availability.full {
      color: var(--accent);
      font-weight: 600;
    }

    .availability.over {
      color: var(--err);
      font-weight: 600;
    }

    .participants-section {
      margin-top: 12px;
      padding-top: 10px;
      border-top: 1px dashed rgba(47, 72, 88, 0.2);
    }

    .participants-section h5 {
      margin: 0 0 8px;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .participants-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 6px;
    }

    .participant-item {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .participant-badge {
      display: inline-grid;
      place-items: center;
      width: 30px;
      height: 30px;
      border-radius: 50%;
      background: var(--accent-2);
      color: white;
      font-size: 0.75rem;
      font-weight: 600;
    }

    .participant-email {
      flex: 1;
      overflow-wrap: anywhere;
    }

    .participant-delete {
      border: none;
      background: transparent;
      color: #8b857d;
      cursor: pointer;
      font-size: 0.9rem;
    }

    .participant-delete:hover {
      color: var(--err);
    }

    .info {
      color: #6f6a65;
      font-style: italic;
    }

    .signup {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .form-group {
      display: grid;
      gap: 6px;
      margin-bottom: 14px;
    }

    input,
    select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    button[type="submit"] {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
      width: 100%;
    }

    .message {
      margin-top: 14px;
      padding: 10px 14px;
      border-radius: 12px;
    }

    .message.success {
      background: rgba(45, 122, 75, 0.1);
      color: var(--ok);
    }

    .message.error {
      background: rgba(198, 59, 43, 0.1);
      color: var(--err);
    }

    .hidden {
      display: none;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mergington High School</h1>
      <p class="subtitle">Extracurricular Activities</p>
    </header>

    <div class="columns">
      <section>
        <h3>Available Activities</h3>
        <div id="activities-list">{{CARDS}}</div>
      </section>

      <section class="signup">
        <h3>Sign Up for an Activity</h3>
        <form id="signup-form">
          <div class="form-group">
            <label for="email">Student Email:</label>
            <input type="email" id="email" required placeholder="your-email@mergington.edu" />
          </div>
          <div class="form-group">
            <label for="activity">Select Activity:</label>
            <select id="activity" required>{{OPTIONS}}</select>
          </div>
          <button type="submit">Sign Up</button>
        </form>
        <div id="message" class="message hidden" role="status"></div>
      </section>
    </div>
  </main>

  <script>
    const NOTICE_MS = {{NOTICE_MS}};
    const PLACEHOLDER = '<option value="">-- Select an activity --</option>';

    const activitiesList = document.getElementById('activities-list');
    const activitySelect = document.getElementById('activity');
    const signupForm = document.getElementById('signup-form');
    const messageDiv = document.getElementById('message');

    let hideTimer = null;

    const escapeHtml = (value) =>
      String(value)
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;')
        .replace(/'/g, '&#39;');

    const getInitials = (identifier) => {
      const local = (identifier || '').split('@')[0];
      const parts = local.split(/{{INITIALS_SPLIT}}/).filter(Boolean);
      let picked = [];
      if (parts.length >= 2) {
        picked = [Array.from(parts[0])[0], Array.from(parts[1])[0]];
      } else if (parts.length === 1) {
        picked = Array.from(parts[0]).slice(0, 2);
      }
      return Array.from(picked.join('').toUpperCase()).slice(0, 2).join('');
    };

    const availability = (details) => {
      const spotsLeft = details.max_participants - (details.participants || []).length;
      if (spotsLeft > 1) return { label: `${spotsLeft} spots left`, cls: 'availability' };
      if (spotsLeft === 1) return { label: '1 spot left', cls: 'availability' };
      if (spotsLeft === 0) return { label: 'Full', cls: 'availability full' };
      return { label: `Over capacity by ${-spotsLeft}`, cls: 'availability over' };
    };

    const showMessage = (text, kind) => {
      messageDiv.textContent = text;
      messageDiv.className = `message ${kind}`;
      clearTimeout(hideTimer);
      hideTimer = setTimeout(() => messageDiv.classList.add('hidden'), NOTICE_MS);
    };

    const renderActivity = (name, details) => {
      const nameHtml = escapeHtml(name);
      const participants = details.participants || [];
      const spots = availability(details);
      const rows = participants
        .map((p) => {
          const email = escapeHtml(p);
          return `<li class="participant-item" data-email="${email}" data-activity="${nameHtml}"><span class="participant-badge">${escapeHtml(getInitials(p))}</span><span class="participant-email">${email}</span><button type="button" class="participant-delete" aria-label="Remove ${email}">&#10006;</button></li>`;
        })
        .join('');
      const list = participants.length > 0
        ? `<ul class="participants-list">${rows}</ul>`
        : '<p class="info">No participants yet</p>';

      const card = document.createElement('div');
      card.className = 'activity-card';
      card.innerHTML = `<h4>${nameHtml}</h4><p>${escapeHtml(details.description || '')}</p><p><strong>Schedule:</strong> ${escapeHtml(details.schedule || 'TBD')}</p><p><strong>Availability:</strong> <span class="${spots.cls}">${spots.label}</span></p><div class="participants-section"><h5>Participants</h5>${list}</div>`;
      return card;
    };

    const loadActivities = async () => {
      try {
        const res = await fetch('/activities');
        if (!res.ok) {
          throw new Error(`Unexpected status ${res.status}`);
        }
        const activities = await res.json();

        activitiesList.innerHTML = '';
        activitySelect.innerHTML = PLACEHOLDER;

        Object.entries(activities).forEach(([name, details]) => {
          activitiesList.appendChild(renderActivity(name, details));

          const option = document.createElement('option');
          option.value = name;
          option.textContent = name;
          activitySelect.appendChild(option);
        });
      } catch (err) {
        activitiesList.innerHTML = '<p>Failed to load activities. Please try again later.</p>';
        console.error('Error fetching activities:', err);
      }
    };

    const submit = async (url, method, fallback) => {
      const res = await fetch(url, { method });
      const result = await res.json();
      if (res.ok) {
        showMessage(result.message, 'success');
        return true;
      }
      showMessage(result.detail || fallback, 'error');
      return false;
    };

    const handleSignup = async (email, activityName) => {
      try {
        const ok = await submit(
          `/activities/${encodeURIComponent(activityName)}/signup?email=${encodeURIComponent(email)}`,
          'POST',
          'An error occurred'
        );
        if (ok) {
          signupForm.reset();
          loadActivities();
        }
      } catch (err) {
        showMessage('Failed to sign up. Please try again.', 'error');
        console.error('Error signing up:', err);
      }
    };

    const handleUnregister = async (email, activityName) => {
      if (!confirm(`Unregister ${email} from ${activityName}?`)) {
        return;
      }
      try {
        const ok = await submit(
          `/activities/${encodeURIComponent(activityName)}/participants?email=${encodeURIComponent(email)}`,
          'DELETE',
          'Failed to unregister participant'
        );
        if (ok) {
          loadActivities();
        }
      } catch (err) {
        showMessage('Failed to unregister. Please try again.', 'error');
        console.error('Error unregistering participant:', err);
      }
    };

    activitiesList.addEventListener('click', (event) => {
      const button = event.target.closest && event.target.closest('.participant-delete');
      if (!button) return;
      const row = button.closest('.participant-item');
      if (!row || !row.dataset.email || !row.dataset.activity) return;
      handleUnregister(row.dataset.email, row.dataset.activity);
    });

    signupForm.addEventListener('submit', (event) => {
      event.preventDefault();
      handleSignup(document.getElementById('email').value, activitySelect.value);
    });

    loadActivities();
  </script>
</body>
</html>
"#;
