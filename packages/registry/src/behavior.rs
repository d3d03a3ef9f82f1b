//! # Behavior Registry
//!
//! Editor-only capabilities (drop target, resize handles, translation) are
//! resolved per node by an ordered list of rules. Each rule pairs a selector
//! predicate with a capability record; the first rule, in registration
//! order, whose selector accepts the node wins.
//!
//! Selectors look at the node itself, not just its type name, so a broad
//! rule can be registered after narrower ones and only catch what they
//! leave behind.
//!
//! ## Resizing
//!
//! A rule may carry a [`Resizer`] per axis. Its handles mutate the node's
//! `style` map in place and do not touch history; callers that want undo
//! and change notification commit the resulting style through the tree
//! engine as a prop update.

use designable_common::{ComponentNode, Props};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::any::Any;
use std::fmt;
use tracing::debug;

/// Predicate deciding whether a rule applies to a node
pub type Selector = Box<dyn Fn(&ComponentNode) -> bool + Send + Sync>;

/// Selector accepting nodes of exactly one type
pub fn matches_type(component_type: &'static str) -> Selector {
    Box::new(move |node: &ComponentNode| node.component_type == component_type)
}

/// Selector accepting nodes whose type is in `types`
pub fn matches_any_type(types: &'static [&'static str]) -> Selector {
    Box::new(move |node: &ComponentNode| types.contains(&node.component_type.as_str()))
}

/// Resizable dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAxis {
    Width,
    Height,
}

impl ResizeAxis {
    /// Key of this dimension in the style map
    pub fn style_key(self) -> &'static str {
        match self {
            ResizeAxis::Width => "width",
            ResizeAxis::Height => "height",
        }
    }
}

/// Increase/decrease mutators bound to one node
pub struct ResizeHandles<'a> {
    node: &'a mut ComponentNode,
    increase: Box<dyn Fn(&mut ComponentNode) + 'a>,
    decrease: Box<dyn Fn(&mut ComponentNode) + 'a>,
}

impl<'a> ResizeHandles<'a> {
    pub fn new(
        node: &'a mut ComponentNode,
        increase: impl Fn(&mut ComponentNode) + 'a,
        decrease: impl Fn(&mut ComponentNode) + 'a,
    ) -> Self {
        Self {
            node,
            increase: Box::new(increase),
            decrease: Box::new(decrease),
        }
    }

    pub fn increase(&mut self) {
        (self.increase)(&mut *self.node);
    }

    pub fn decrease(&mut self) {
        (self.decrease)(&mut *self.node);
    }

    /// The node the handles operate on
    pub fn node(&self) -> &ComponentNode {
        &*self.node
    }
}

/// Factory for resize handles along one axis
pub trait Resizer: Send + Sync {
    /// Bind handles to `node`. `element` is the rendered element, if the
    /// caller has one; it is opaque to the registry.
    fn handles<'a>(&self, node: &'a mut ComponentNode, element: Option<&dyn Any>) -> ResizeHandles<'a>;
}

/// Fixed-step pixel resizing with a baseline and a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelStep {
    pub axis: ResizeAxis,
    /// Value assumed when the current one is absent or unparseable
    pub baseline: i64,
    pub step: i64,
    /// Decreasing never goes below this
    pub min: i64,
}

impl PixelStep {
    pub fn new(axis: ResizeAxis, baseline: i64, step: i64, min: i64) -> Self {
        Self {
            axis,
            baseline,
            step,
            min,
        }
    }

    pub fn increase(&self, node: &mut ComponentNode) {
        let key = self.axis.style_key();
        let current = node
            .style()
            .and_then(|style| style.get(key))
            .filter(|value| is_present(value))
            .map(|value| parse_pixels(value).unwrap_or(self.baseline))
            .unwrap_or(self.baseline);

        let next = current.saturating_add(self.step);
        node.style_mut().insert(key.to_string(), Value::String(format!("{next}px")));
    }

    /// No-op when the dimension is not set yet or already at or below the floor
    pub fn decrease(&self, node: &mut ComponentNode) {
        let key = self.axis.style_key();
        let Some(current) = node
            .style()
            .and_then(|style| style.get(key))
            .filter(|value| is_present(value))
            .map(|value| parse_pixels(value).unwrap_or(self.baseline))
        else {
            return;
        };
        if current <= self.min {
            return;
        }

        let next = current.saturating_sub(self.step).max(self.min);
        node.style_mut().insert(key.to_string(), Value::String(format!("{next}px")));
    }
}

impl Resizer for PixelStep {
    fn handles<'a>(&self, node: &'a mut ComponentNode, _element: Option<&dyn Any>) -> ResizeHandles<'a> {
        let policy = *self;
        ResizeHandles::new(node, move |n| policy.increase(n), move |n| policy.decrease(n))
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Leading integer of a CSS length (`"240px"` → 240). Zero counts as
/// unparseable so the caller falls back to its baseline.
fn parse_pixels(value: &Value) -> Option<i64> {
    let parsed = match value {
        Value::String(s) => leading_integer(s),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        _ => None,
    };
    parsed.filter(|v| *v != 0)
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}

/// One capability rule
pub struct ComponentBehavior {
    selector: Selector,
    pub droppable: Option<bool>,
    pub translatable: Option<bool>,
    pub designer_props: Props,
    width: Option<Box<dyn Resizer>>,
    height: Option<Box<dyn Resizer>>,
}

impl ComponentBehavior {
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            droppable: None,
            translatable: None,
            designer_props: Props::new(),
            width: None,
            height: None,
        }
    }

    pub fn droppable(mut self, droppable: bool) -> Self {
        self.droppable = Some(droppable);
        self
    }

    pub fn translatable(mut self, translatable: bool) -> Self {
        self.translatable = Some(translatable);
        self
    }

    pub fn designer_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.designer_props.insert(key.into(), value.into());
        self
    }

    pub fn resizable(mut self, axis: ResizeAxis, resizer: impl Resizer + 'static) -> Self {
        let slot = match axis {
            ResizeAxis::Width => &mut self.width,
            ResizeAxis::Height => &mut self.height,
        };
        *slot = Some(Box::new(resizer));
        self
    }

    /// Whether this rule applies to `node`
    pub fn matches(&self, node: &ComponentNode) -> bool {
        (self.selector)(node)
    }

    pub fn resizer(&self, axis: ResizeAxis) -> Option<&dyn Resizer> {
        match axis {
            ResizeAxis::Width => self.width.as_deref(),
            ResizeAxis::Height => self.height.as_deref(),
        }
    }

    pub fn is_resizable(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}

impl fmt::Debug for ComponentBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentBehavior")
            .field("droppable", &self.droppable)
            .field("translatable", &self.translatable)
            .field("designer_props", &self.designer_props)
            .field("width", &self.width.is_some())
            .field("height", &self.height.is_some())
            .finish()
    }
}

/// Ordered capability rules
#[derive(Default)]
pub struct BehaviorRegistry {
    behaviors: Vec<ComponentBehavior>,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; it is consulted after every rule registered before it
    pub fn register_behavior(&mut self, behavior: ComponentBehavior) {
        self.behaviors.push(behavior);
        debug!(rules = self.behaviors.len(), "Registered behavior");
    }

    /// First rule accepting `node`
    pub fn behavior_for(&self, node: &ComponentNode) -> Option<&ComponentBehavior> {
        self.behaviors.iter().find(|behavior| behavior.matches(node))
    }

    pub fn behaviors(&self) -> &[ComponentBehavior] {
        &self.behaviors
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}

impl fmt::Debug for BehaviorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorRegistry")
            .field("behaviors", &format!("{} rules", self.behaviors.len()))
            .finish()
    }
}
