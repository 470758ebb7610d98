//! Side-effect vocabulary shared by every page behavior.
//!
//! # Design
//! - Behaviors are pure rules returning [`Effect`] lists; they never touch the DOM.
//! - A [`Host`] applies effects against whatever element and event triggered the rule.
//! - The wasm layer implements [`Host`] over `web-sys`; tests record calls instead.

use crate::core::error::EnhanceError;

/// A single side effect requested by a behavior rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Set an inline style property on the target element.
    Style {
        /// CSS property name in kebab case.
        property: &'static str,
        /// Property value.
        value: String,
    },
    /// Cancel the default action of the triggering event.
    PreventDefault,
    /// Perform a full-page navigation.
    Navigate(String),
    /// Smoothly scroll the element matching the selector to the top of the viewport.
    ScrollIntoView(String),
    /// Apply the nested effects after a delay.
    Defer {
        /// Delay in milliseconds.
        delay_ms: u32,
        /// Effects to apply once the delay elapses.
        effects: Vec<Self>,
    },
    /// Stop observing the target for viewport intersections.
    StopObserving,
}

impl Effect {
    /// Shorthand for [`Effect::Style`].
    #[must_use]
    pub fn style(property: &'static str, value: impl Into<String>) -> Self {
        Self::Style {
            property,
            value: value.into(),
        }
    }
}

/// Capabilities a behavior target exposes to the effect applier.
pub trait Host {
    /// Set an inline style property on the target element.
    ///
    /// # Errors
    /// Returns [`EnhanceError::Dom`] when the style declaration rejects the write.
    fn set_style(&mut self, property: &str, value: &str) -> Result<(), EnhanceError>;

    /// Cancel the default action of the triggering event.
    fn prevent_default(&mut self);

    /// Navigate the page to `url`.
    ///
    /// # Errors
    /// Returns [`EnhanceError`] when the location cannot be updated.
    fn navigate(&mut self, url: &str) -> Result<(), EnhanceError>;

    /// Scroll the element matching `selector` into view. Missing targets are ignored.
    ///
    /// # Errors
    /// Returns [`EnhanceError::Dom`] when the selector is invalid.
    fn scroll_into_view(&mut self, selector: &str) -> Result<(), EnhanceError>;

    /// Schedule `effects` to run against the same target after `delay_ms`.
    fn defer(&mut self, delay_ms: u32, effects: Vec<Effect>);

    /// Stop observing the target for viewport intersections.
    fn stop_observing(&mut self);
}

/// Apply `effects` in order.
///
/// Every effect is attempted even after a failure.
///
/// # Errors
/// Returns the first error reported by the host.
pub fn apply_effects<H: Host + ?Sized>(
    host: &mut H,
    effects: Vec<Effect>,
) -> Result<(), EnhanceError> {
    let mut first_error = None;
    for effect in effects {
        let outcome = match effect {
            Effect::Style { property, value } => host.set_style(property, &value),
            Effect::PreventDefault => {
                host.prevent_default();
                Ok(())
            }
            Effect::Navigate(url) => host.navigate(&url),
            Effect::ScrollIntoView(selector) => host.scroll_into_view(&selector),
            Effect::Defer { delay_ms, effects } => {
                host.defer(delay_ms, effects);
                Ok(())
            }
            Effect::StopObserving => {
                host.stop_observing();
                Ok(())
            }
        };
        if let Err(err) = outcome
            && first_error.is_none()
        {
            first_error = Some(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}
