//! Built-in component palette, behavior rules and UI strings.
//!
//! Each constructor returns a fresh, independent registry so separate
//! designer sessions (and tests) never share state.

use crate::{
    matches_any_type, matches_type, BehaviorRegistry, ComponentBehavior, ComponentCatalog,
    ComponentMetadata, LocaleStore, PixelStep, PropKind, PropSchema, ResizeAxis,
};
use serde_json::json;

const FORM_CONTROLS: &[&str] = &["Form", "Input", "Select", "Switch"];
const GRID: &[&str] = &["Row", "Col"];
const BASIC: &[&str] = &["Button", "Text", "Divider"];

const SIZES: [&str; 3] = ["large", "default", "small"];
const SIZES_WITH_MINI: [&str; 4] = ["large", "default", "small", "mini"];

fn string(name: &str, default: &str) -> PropSchema {
    PropSchema::new(PropKind::String, name, json!(default))
}

fn boolean(name: &str, default: bool) -> PropSchema {
    PropSchema::new(PropKind::Boolean, name, json!(default))
}

fn number(name: &str, default: i64) -> PropSchema {
    PropSchema::new(PropKind::Number, name, json!(default))
}

fn select<const N: usize>(name: &str, options: [&str; N], default: &str) -> PropSchema {
    PropSchema::new(PropKind::Select, name, json!(default)).with_options(options)
}

/// Catalog of the stock components
pub fn build_default_catalog() -> ComponentCatalog {
    let mut catalog = ComponentCatalog::new();

    // Form components
    catalog.register_component(
        ComponentMetadata::new("Form", "Form")
            .icon("DocumentCopy")
            .group("form")
            .default_props(json!({
                "labelPosition": "right",
                "labelWidth": 80,
                "style": {
                    "width": "100%",
                    "padding": "20px",
                    "backgroundColor": "#fff",
                    "borderRadius": "8px",
                    "boxShadow": "0 2px 8px rgba(0, 0, 0, 0.06)"
                }
            }))
            .prop("labelPosition", select("labelPosition", ["left", "right", "top"], "right"))
            .prop("labelWidth", number("labelWidth", 80))
            .prop("disabled", boolean("disabled", false))
            .container(),
    );

    catalog.register_component(
        ComponentMetadata::new("Input", "Input")
            .icon("Edit")
            .group("form")
            .default_props(json!({
                "placeholder": "",
                "value": "",
                "disabled": false,
                "clearable": true,
                "style": { "width": "100%" }
            }))
            .prop("placeholder", string("placeholder", ""))
            .prop("value", string("value", ""))
            .prop("disabled", boolean("disabled", false))
            .prop("clearable", boolean("clearable", true))
            .prop("size", select("size", SIZES, "default")),
    );

    catalog.register_component(
        ComponentMetadata::new("Select", "Select")
            .icon("Select")
            .group("form")
            .default_props(json!({
                "placeholder": "Please select",
                "value": "",
                "options": [
                    { "label": "Option 1", "value": "1" },
                    { "label": "Option 2", "value": "2" },
                    { "label": "Option 3", "value": "3" }
                ],
                "disabled": false,
                "style": { "width": "100%" }
            }))
            .prop("placeholder", string("placeholder", "Please select"))
            .prop("value", string("value", ""))
            .prop(
                "options",
                PropSchema::new(PropKind::Json, "options", json!([{ "label": "Option 1", "value": "1" }])),
            )
            .prop("disabled", boolean("disabled", false))
            .prop("multiple", boolean("multiple", false))
            .prop("size", select("size", SIZES, "default")),
    );

    catalog.register_component(
        ComponentMetadata::new("Switch", "Switch")
            .icon("Switch")
            .group("form")
            .default_props(json!({
                "value": false,
                "disabled": false,
                "activeText": "",
                "inactiveText": ""
            }))
            .prop("value", boolean("value", false))
            .prop("disabled", boolean("disabled", false))
            .prop("activeText", string("activeText", ""))
            .prop("inactiveText", string("inactiveText", ""))
            .prop("activeColor", PropSchema::new(PropKind::Color, "activeColor", json!("#409eff")))
            .prop("inactiveColor", PropSchema::new(PropKind::Color, "inactiveColor", json!("#dcdfe6"))),
    );

    // Layout components
    catalog.register_component(
        ComponentMetadata::new("Card", "Card")
            .icon("Box")
            .group("layout")
            .default_props(json!({
                "title": "Card title",
                "bordered": true,
                "shadow": "hover",
                "style": { "width": "100%", "marginBottom": "20px" }
            }))
            .prop("title", string("title", "Card title"))
            .prop("bordered", boolean("bordered", true))
            .prop("shadow", select("shadow", ["always", "hover", "never"], "hover"))
            .prop("bodyStyle", PropSchema::new(PropKind::Json, "bodyStyle", json!({})))
            .container(),
    );

    catalog.register_component(
        ComponentMetadata::new("Row", "Row")
            .icon("Grid")
            .group("layout")
            .default_props(json!({
                "gutter": 16,
                "justify": "start",
                "align": "top",
                "style": { "width": "100%", "marginBottom": "16px" }
            }))
            .prop("gutter", number("gutter", 16))
            .prop(
                "justify",
                select("justify", ["start", "end", "center", "space-around", "space-between"], "start"),
            )
            .prop("align", select("align", ["top", "middle", "bottom"], "top"))
            .container(),
    );

    catalog.register_component(
        ComponentMetadata::new("Col", "Column")
            .icon("Grid")
            .group("layout")
            .default_props(json!({ "span": 12, "offset": 0, "push": 0, "pull": 0, "style": {} }))
            .prop("span", number("span", 12).with_range(1.0, 24.0))
            .prop("offset", number("offset", 0).with_range(0.0, 24.0))
            .prop("push", number("push", 0).with_range(0.0, 24.0))
            .prop("pull", number("pull", 0).with_range(0.0, 24.0))
            .container(),
    );

    // Basic components
    catalog.register_component(
        ComponentMetadata::new("Button", "Button")
            .icon("Operation")
            .group("basic")
            .default_props(json!({
                "type": "primary",
                "label": "Button",
                "size": "default",
                "disabled": false,
                "round": false,
                "plain": false,
                "icon": "",
                "style": {}
            }))
            .prop("label", string("label", "Button"))
            .prop(
                "type",
                select(
                    "type",
                    ["primary", "success", "warning", "danger", "info", "text", "default"],
                    "primary",
                ),
            )
            .prop("size", select("size", SIZES_WITH_MINI, "default"))
            .prop("disabled", boolean("disabled", false))
            .prop("round", boolean("round", false))
            .prop("plain", boolean("plain", false))
            .prop("icon", string("icon", "")),
    );

    catalog.register_component(
        ComponentMetadata::new("Text", "Text")
            .icon("Font")
            .group("basic")
            .default_props(json!({
                "text": "Text content",
                "type": "default",
                "size": "default",
                "strong": false,
                "italic": false,
                "style": {}
            }))
            .prop("text", string("text", "Text content"))
            .prop(
                "type",
                select("type", ["default", "primary", "success", "warning", "danger"], "default"),
            )
            .prop("size", select("size", SIZES_WITH_MINI, "default"))
            .prop("strong", boolean("strong", false))
            .prop("italic", boolean("italic", false)),
    );

    catalog.register_component(
        ComponentMetadata::new("Divider", "Divider")
            .icon("Scissor")
            .group("basic")
            .default_props(json!({
                "content": "",
                "direction": "horizontal",
                "contentPosition": "center",
                "style": {}
            }))
            .prop("content", string("content", ""))
            .prop("direction", select("direction", ["horizontal", "vertical"], "horizontal"))
            .prop(
                "contentPosition",
                select("contentPosition", ["left", "center", "right"], "center"),
            ),
    );

    // Data display
    catalog.register_component(
        ComponentMetadata::new("Table", "Table")
            .icon("Grid")
            .group("data")
            .default_props(json!({
                "columns": [
                    { "prop": "name", "label": "Name" },
                    { "prop": "age", "label": "Age" },
                    { "prop": "address", "label": "Address" }
                ],
                "data": [
                    { "name": "Alice", "age": 18, "address": "12 Harbour St" },
                    { "name": "Bob", "age": 20, "address": "5 Market Sq" },
                    { "name": "Carol", "age": 22, "address": "9 Hill Rd" }
                ],
                "border": false,
                "style": { "width": "100%", "marginBottom": "20px" }
            }))
            .prop(
                "columns",
                PropSchema::new(PropKind::Json, "columns", json!([{ "prop": "name", "label": "Name" }])),
            )
            .prop("data", PropSchema::new(PropKind::Json, "data", json!([{ "name": "Alice" }])))
            .prop("border", boolean("border", false))
            .prop("stripe", boolean("stripe", false))
            .prop("highlightCurrentRow", boolean("highlightCurrentRow", false)),
    );

    catalog
}

/// Capability rules for the stock components, most specific first
pub fn build_default_behaviors() -> BehaviorRegistry {
    let mut registry = BehaviorRegistry::new();

    registry.register_behavior(
        ComponentBehavior::new(matches_type("Root"))
            .droppable(true)
            .designer_prop("displayName", "Root container"),
    );

    registry.register_behavior(
        ComponentBehavior::new(matches_any_type(FORM_CONTROLS))
            .resizable(ResizeAxis::Width, PixelStep::new(ResizeAxis::Width, 200, 10, 100))
            .translatable(true),
    );

    registry.register_behavior(
        ComponentBehavior::new(matches_type("Card"))
            .droppable(true)
            .resizable(ResizeAxis::Width, PixelStep::new(ResizeAxis::Width, 300, 20, 200))
            .resizable(ResizeAxis::Height, PixelStep::new(ResizeAxis::Height, 200, 20, 100))
            .translatable(true),
    );

    registry.register_behavior(
        ComponentBehavior::new(matches_any_type(GRID))
            .droppable(true)
            .translatable(true),
    );

    registry.register_behavior(ComponentBehavior::new(matches_any_type(BASIC)).translatable(true));

    registry.register_behavior(
        ComponentBehavior::new(matches_type("Table"))
            .droppable(true)
            .resizable(ResizeAxis::Width, PixelStep::new(ResizeAxis::Width, 600, 50, 400))
            .resizable(ResizeAxis::Height, PixelStep::new(ResizeAxis::Height, 300, 50, 200))
            .translatable(true),
    );

    registry
}

/// zh-cn and en-us strings for palette groups, panels, actions and
/// component labels (`component.<Id>`)
pub fn build_default_locales() -> LocaleStore {
    let mut locales = LocaleStore::new();

    locales.register_locales(
        "zh-cn",
        [
            ("components.basic", "基础组件"),
            ("components.form", "表单组件"),
            ("components.layout", "布局组件"),
            ("components.data", "数据展示"),
            ("panel.title", "属性设置"),
            ("action.add", "添加"),
            ("action.remove", "删除"),
            ("action.save", "保存"),
            ("action.publish", "发布"),
            ("component.Form", "表单"),
            ("component.Input", "输入框"),
            ("component.Select", "选择器"),
            ("component.Switch", "开关"),
            ("component.Card", "卡片"),
            ("component.Row", "行"),
            ("component.Col", "列"),
            ("component.Button", "按钮"),
            ("component.Text", "文本"),
            ("component.Divider", "分割线"),
            ("component.Table", "表格"),
        ],
    );

    locales.register_locales(
        "en-us",
        [
            ("components.basic", "Basic Components"),
            ("components.form", "Form Components"),
            ("components.layout", "Layout Components"),
            ("components.data", "Data Display"),
            ("panel.title", "Property Settings"),
            ("action.add", "Add"),
            ("action.remove", "Remove"),
            ("action.save", "Save"),
            ("action.publish", "Publish"),
            ("component.Form", "Form"),
            ("component.Input", "Input"),
            ("component.Select", "Select"),
            ("component.Switch", "Switch"),
            ("component.Card", "Card"),
            ("component.Row", "Row"),
            ("component.Col", "Column"),
            ("component.Button", "Button"),
            ("component.Text", "Text"),
            ("component.Divider", "Divider"),
            ("component.Table", "Table"),
        ],
    );

    locales
}
