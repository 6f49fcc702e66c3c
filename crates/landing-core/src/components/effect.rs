use crate::view::{Element, Node};

/// Data attribute carrying the effect name
pub const EFFECT_ATTR: &str = "data-signature-effect";

/// Structural wrapper that tags its children with an effect name.
///
/// No visual transformation is applied; the tag is metadata for styling and
/// test hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureEffect {
    effect: Option<String>,
    class: String,
}

impl SignatureEffect {
    pub fn new(effect: impl Into<String>) -> Self {
        Self {
            effect: Some(effect.into()),
            class: String::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn effect(&self) -> Option<&str> {
        self.effect.as_deref()
    }

    pub fn render(&self, children: Vec<Node>) -> Node {
        let class = if self.class.is_empty() {
            "relative".to_string()
        } else {
            format!("relative {}", self.class)
        };
        let mut element = Element::new("div").class(class).children(children);
        if let Some(effect) = &self.effect {
            element = element.data(EFFECT_ATTR, effect.clone());
        }
        element.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Tone, Visual};

    #[test]
    fn test_tag_attached_verbatim() {
        let node = SignatureEffect::new("Grain / Noise!").render(vec![Node::text("x", Tone::Main)]);
        let element = node.as_element().unwrap();
        assert_eq!(element.data.get(EFFECT_ATTR).map(String::as_str), Some("Grain / Noise!"));
        assert_eq!(element.class, "relative");
    }

    #[test]
    fn test_children_unchanged() {
        let children = vec![Node::text("a", Tone::Main), Node::bold("b", Tone::Accent)];
        let node = SignatureEffect::new("pulse").render(children.clone());
        let element = node.as_element().unwrap();
        assert_eq!(element.children, children);
        assert!(element.motion.is_none());
        assert_eq!(element.visual, Visual::IDENTITY);
    }

    #[test]
    fn test_no_effect_name_no_attribute() {
        let node = SignatureEffect::default().with_class("rail").render(Vec::new());
        let element = node.as_element().unwrap();
        assert!(element.data.is_empty());
        assert_eq!(element.class, "relative rail");
    }
}
