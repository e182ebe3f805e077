const DEFAULT_PHONE: &str = "+972000000000";
const DEFAULT_GREETING: &str = "היי גיא, אני מעוניין לדבר על פיתוח אפליקציה";

/// WhatsApp conversation offered next to the form.
///
/// Opening it does not touch the form fields or the dispatcher.
#[derive(Debug, Clone)]
pub struct DirectChannel {
    phone: String,
    greeting: String,
}

impl Default for DirectChannel {
    fn default() -> Self {
        Self::new(DEFAULT_PHONE.into(), DEFAULT_GREETING.into())
    }
}

impl DirectChannel {
    pub fn new(phone: String, greeting: String) -> Self {
        Self { phone, greeting }
    }

    /// Deep link with the greeting pre-filled, for the shell to open.
    pub fn link(&self) -> String {
        tracing::debug!(phone = %self.phone, "Opening the direct channel");
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            urlencoding::encode(&self.greeting)
        )
    }
}
