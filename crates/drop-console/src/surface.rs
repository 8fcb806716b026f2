//! Display surface the console renders into

/// A settable text region that can be switched on and off.
///
/// Implement this trait to attach the console to a host UI. The console
/// writes the whole rendered transcript on every change and only calls
/// `set_active` when its visibility actually changes.
pub trait DisplaySurface: Send {
    /// Replace the displayed text
    fn set_text(&mut self, text: &str);

    /// Activate or deactivate the surface
    fn set_active(&mut self, active: bool);
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for Box<T> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn set_active(&mut self, active: bool) {
        (**self).set_active(active);
    }
}

/// In-memory surface that keeps the last text and counts state changes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    pub text: String,
    pub active: bool,
    /// Number of `set_text` calls received
    pub text_updates: usize,
    pub activations: usize,
    pub deactivations: usize,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for TextSurface {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.text_updates += 1;
    }

    fn set_active(&mut self, active: bool) {
        if active {
            self.activations += 1;
        } else {
            self.deactivations += 1;
        }
        self.active = active;
    }
}
