use crate::element::Element;
use std::fmt;
use std::rc::Rc;

/// Type-safe icon identifier.
///
/// The host toolkit maps names to actual icon glyphs; this crate only passes
/// them through.
///
/// # Examples
///
/// ```
/// use ayumi::IconName;
///
/// let icon = IconName::new("cloud_upload");
/// assert_eq!(icon.as_str(), "cloud_upload");
///
/// let icon: IconName = "payments".into();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconName(String);

impl IconName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for IconName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for IconName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds a step's content on demand.
pub type ContentProducer = Rc<dyn Fn() -> Element>;

/// One entry of a stepper: title, optional subtitle, optional content and
/// optional custom indicator icon.
///
/// Descriptors are immutable once built. The content producer is only called
/// while the step is the current one.
///
/// # Examples
///
/// ```
/// use ayumi::{Color, Element, StepDescriptor};
///
/// let step = StepDescriptor::new("Shipping")
///     .subtitle("Where should we send it?")
///     .icon("local_shipping")
///     .content(|| Element::text("address form", 14.0, Color::BLACK));
///
/// assert_eq!(step.title(), "Shipping");
/// assert!(step.has_content());
/// ```
#[derive(Clone)]
pub struct StepDescriptor {
    title: String,
    subtitle: Option<String>,
    icon: Option<IconName>,
    content: Option<ContentProducer>,
}

impl fmt::Debug for StepDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDescriptor")
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("icon", &self.icon)
            .field("has_content", &self.content.is_some())
            .finish()
    }
}

impl StepDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            icon: None,
            content: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Custom indicator icon, shown while the step is pending or current.
    pub fn icon(mut self, icon: impl Into<IconName>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn content(mut self, producer: impl Fn() -> Element + 'static) -> Self {
        self.content = Some(Rc::new(producer));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn icon_name(&self) -> Option<&IconName> {
        self.icon.as_ref()
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Builds the content, or [`Element::Empty`] for a step without any.
    pub fn produce_content(&self) -> Element {
        self.content
            .as_ref()
            .map(|producer| producer())
            .unwrap_or_default()
    }
}

impl From<&str> for StepDescriptor {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for StepDescriptor {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Color;
    use std::cell::Cell;

    #[test]
    fn test_descriptor_fields() {
        let step = StepDescriptor::new("Review")
            .subtitle("Check everything")
            .icon("fact_check");

        assert_eq!(step.title(), "Review");
        assert_eq!(step.subtitle_text(), Some("Check everything"));
        assert_eq!(step.icon_name(), Some(&IconName::new("fact_check")));
        assert!(!step.has_content());
        assert_eq!(step.produce_content(), Element::Empty);
    }

    #[test]
    fn test_content_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let step = StepDescriptor::new("Pay").content(move || {
            counter.set(counter.get() + 1);
            Element::text("card form", 14.0, Color::BLACK)
        });

        assert_eq!(calls.get(), 0);
        let content = step.clone().produce_content();
        assert_eq!(calls.get(), 1);
        assert_eq!(content.texts()[0].text, "card form");
    }

    #[test]
    fn test_icon_name() {
        let a = IconName::new("done");
        let b: IconName = String::from("done").into();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "done");
        assert_eq!(a.as_ref(), "done");
    }

    #[test]
    fn test_from_title() {
        let step: StepDescriptor = "Account".into();
        assert_eq!(step.title(), "Account");
        assert!(step.subtitle_text().is_none());
    }
}
