//! Built-in theme table.
//!
//! Registered at startup by [`ThemeRegistry::with_builtins`] and the
//! process-wide registry. Values are canvas-style strings: hex or
//! `rgb()`/`rgba()` colors (some with a `%a` alpha placeholder, see
//! [`crate::value`]), font shorthands, and the `cursorType` token.

use std::collections::BTreeMap;

use crate::error::ThemeError;
use crate::registry::ThemeRegistry;

/// Register the built-in themes.
///
/// `greenonblack` is defined from scratch; `greenonblackzebra` is derived
/// from it with a zebra stripe visible against the black background.
pub fn install_builtin_themes(registry: &mut ThemeRegistry) -> Result<(), ThemeError> {
    registry.define("greenonblack", greenonblack_fields())?;
    registry.derive(
        "greenonblackzebra",
        "greenonblack",
        BTreeMap::from([("zebraStripeColor".to_string(), "#111111".to_string())]),
    )?;
    Ok(())
}

fn greenonblack_fields() -> BTreeMap<String, String> {
    let monospace = "10pt Monaco, Lucida Console, monospace";
    let gutter_grey = "#888888";
    let comment_grey = "#666666";
    let parchment = "#bdae9d";
    let amber = "#BF9464";

    let mut fields = BTreeMap::new();
    let mut put = |key: &str, value: &str| {
        fields.insert(key.to_string(), value.to_string());
    };

    put("backgroundStyle", "#000000");
    put("gutterStyle", "#d2d2d2");
    put("lineNumberColor", gutter_grey);
    put("lineNumberFont", monospace);
    put("zebraStripeColor", "#000000");
    put("highlightCurrentLineColor", "#3a312b");
    put("editorTextFont", monospace);
    put("editorTextColor", "#2fe41f");
    put("editorSelectedTextColor", "rgb(240, 240, 240)");
    put("editorSelectedTextBackground", "#243b75");
    put("cursorStyle", "#879aff");
    // One of "underline" or "ibeam".
    put("cursorType", "ibeam");
    put("unfocusedCursorStrokeStyle", "#FF0033");
    put("unfocusedCursorFillStyle", "#73171E");
    put("partialNibStyle", "rgba(100, 100, 100, 0.3)");
    put("partialNibArrowStyle", "rgba(255, 255, 255, 0.3)");
    put("partialNibStrokeStyle", "rgba(150, 150, 150, 0.3)");
    put("fullNibStyle", "rgb(100, 100, 100)");
    put("fullNibArrowStyle", "rgb(255, 255, 255)");
    put("fullNibStrokeStyle", "rgb(150, 150, 150)");
    put("scrollTrackFillStyle", "rgba(50, 50, 50, 0.8)");
    put("scrollTrackStrokeStyle", "rgb(150, 150, 150)");
    put("scrollBarFillStyle", "rgba(0, 0, 0, %a)");
    put("scrollBarFillGradientTopStart", "rgba(90, 90, 90, %a)");
    put("scrollBarFillGradientTopStop", "rgba(40, 40, 40, %a)");
    put("scrollBarFillGradientBottomStart", "rgba(22, 22, 22, %a)");
    put("scrollBarFillGradientBottomStop", "rgba(44, 44, 44, %a)");
    put("tabSpace", "#E0D4CB");
    put("searchHighlight", "#B55C00");
    put("searchHighlightSelected", "#FF9A00");

    // Syntax tokens.
    put("plain", parchment);
    put("preprocessor", "rgb(100,100,100)");
    put("keyword", "#42a8ed");
    put("string", "#039a0a");
    put("comment", comment_grey);
    put("c-comment", comment_grey);
    put("punctuation", gutter_grey);
    put("attribute", amber);
    put("test", "rgb(255,0,0)");
    put("cdata", parchment);
    put("attribute-value", amber);
    put("tag", parchment);
    put("tag-name", parchment);
    put("value", amber);
    put("important", "#990000");
    put("cssclass", amber);
    put("cssid", parchment);

    fields
}
