use html_escape::encode_text;

use super::Submission;

const SITE_NAME: &str = "MVPing";

/// The email sent to the site owner for one contact submission.
#[derive(Debug, Clone)]
pub struct Notification {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

impl Notification {
    pub fn render(submission: &Submission) -> Self {
        let name = submission.name.as_ref();
        let email = submission.email.as_ref();
        let idea = submission.idea.as_ref();

        let subject = format!("פנייה חדשה מהאתר - {}", name);
        let html_body = format!(
            r#"<div dir="rtl" style="font-family: Arial, sans-serif;">
  <h2>פנייה חדשה מהאתר {site}</h2>
  <div style="background: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>שם:</strong> {name}</p>
    <p><strong>אימייל:</strong> {email}</p>
    <p><strong>הרעיון:</strong></p>
    <div style="background: white; padding: 15px; border-radius: 5px; margin-top: 10px;">
      {idea}
    </div>
  </div>
  <p style="color: #666; font-size: 14px;">הודעה זו נשלחה מטופס יצירת הקשר באתר {site}</p>
</div>"#,
            site = SITE_NAME,
            name = encode_text(name),
            email = encode_text(email),
            idea = line_breaks(&encode_text(idea)),
        );
        let text_body = format!(
            "פנייה חדשה מהאתר {site}\n\nשם: {name}\nאימייל: {email}\nהרעיון: {idea}\n\nהודעה זו נשלחה מטופס יצירת הקשר באתר {site}\n",
            site = SITE_NAME,
            name = name,
            email = email,
            idea = idea,
        );

        Self {
            subject,
            html_body,
            text_body,
        }
    }
}

fn line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "<br>")
}
