//! Generic endpoint resolver.
//!
//! Interprets the declarative table in [`crate::catalog`]: one function turns
//! any (tool name, argument map) pair into the relative path-and-query string
//! NINA's Advanced API expects. This replaces the long per-tool conditional
//! chain of the original server while producing identical URLs.

use serde_json::{Map, Value};

use crate::catalog::{self, QueryArg, ToolSpec};
use crate::error::ResolveError;

/// Resolve a tool invocation to a relative URL path-and-query string.
///
/// Arguments are read by name from `args`; absent (or JSON `null`) values
/// fall back to the per-tool defaults documented in the table. No range or
/// type validation is performed.
pub fn resolve(name: &str, args: &Map<String, Value>) -> Result<String, ResolveError> {
    let tool = catalog::find(name).ok_or_else(|| ResolveError::UnknownTool(name.to_string()))?;
    Ok(endpoint(tool, args))
}

fn endpoint(tool: &ToolSpec, args: &Map<String, Value>) -> String {
    let mut out = String::from(tool.path);
    let mut separator = '?';
    for query in tool.query {
        let value = query_value(query, args);
        if query.omit_if_empty && value.is_empty() {
            continue;
        }
        out.push(separator);
        out.push_str(query.key);
        out.push('=');
        out.push_str(&encode(&value));
        separator = '&';
    }
    out
}

fn query_value(query: &QueryArg, args: &Map<String, Value>) -> String {
    match args.get(query.arg) {
        Some(value) if !value.is_null() => render(value),
        _ => query.fallback.render(),
    }
}

/// Render a JSON argument value as query-string text.
///
/// Booleans serialize as the lowercase literals `true`/`false`, numbers as
/// their JSON text, strings verbatim. Anything else (the API never asks for
/// arrays or objects) falls back to its compact JSON form.
fn render(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Percent-encode one query value. Path segments are fixed table data and
/// never pass through here.
fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test arguments must be an object"),
        }
    }

    #[test]
    fn unknown_tool_is_signaled_not_panicked() {
        let err = resolve("unknown_tool_xyz", &Map::new()).unwrap_err();
        assert_eq!(err, ResolveError::UnknownTool("unknown_tool_xyz".into()));
        assert_eq!(err.to_string(), "Unknown tool unknown_tool_xyz");
    }

    #[test]
    fn bare_tool_resolves_to_plain_path() {
        assert_eq!(resolve("nina_get_version", &Map::new()).unwrap(), "version");
        assert_eq!(
            resolve("nina_park_telescope", &Map::new()).unwrap(),
            "equipment/telescope/park"
        );
    }

    #[test]
    fn binning_feeds_both_axes() {
        let path = resolve("nina_set_binning", &args(json!({"binning": 2}))).unwrap();
        assert_eq!(path, "equipment/camera/binning?x=2&y=2");
    }

    #[test]
    fn capture_without_args_uses_documented_defaults() {
        let path = resolve("nina_capture_image", &Map::new()).unwrap();
        assert_eq!(
            path,
            "equipment/camera/capture?exposuretime=1&binning=1&gain=0"
        );
    }

    #[test]
    fn capture_with_args_interpolates_them() {
        let path = resolve(
            "nina_capture_image",
            &args(json!({"exposure_time": 30.5, "binning": 2, "gain": 120})),
        )
        .unwrap();
        assert_eq!(
            path,
            "equipment/camera/capture?exposuretime=30.5&binning=2&gain=120"
        );
    }

    #[test]
    fn booleans_serialize_lowercase() {
        let path = resolve("nina_control_dew_heater", &args(json!({"on": true}))).unwrap();
        assert_eq!(path, "equipment/camera/dew-heater?on=true");

        let path = resolve("nina_sequence_start", &Map::new()).unwrap();
        assert_eq!(path, "sequence/start?skipValidation=false");
    }

    #[test]
    fn connect_maps_device_id_to_wire_key() {
        let path = resolve(
            "nina_connect_camera",
            &args(json!({"device_id": "ZWO ASI2600MM"})),
        )
        .unwrap();
        assert_eq!(path, "equipment/camera/connect?to=ZWO+ASI2600MM");
    }

    #[test]
    fn slew_renames_coordinate_arguments() {
        let path = resolve(
            "nina_slew_telescope",
            &args(json!({"ra": 5.35, "dec": -69.75})),
        )
        .unwrap();
        assert_eq!(
            path,
            "equipment/telescope/slew?rightascension=5.35&declination=-69.75"
        );
    }

    #[test]
    fn autofocus_omits_empty_method() {
        assert_eq!(
            resolve("nina_start_autofocus", &Map::new()).unwrap(),
            "equipment/focuser/autofocus"
        );
        assert_eq!(
            resolve("nina_start_autofocus", &args(json!({"method": ""}))).unwrap(),
            "equipment/focuser/autofocus"
        );
        assert_eq!(
            resolve("nina_start_autofocus", &args(json!({"method": "hfd"}))).unwrap(),
            "equipment/focuser/autofocus?method=hfd"
        );
    }

    #[test]
    fn cooling_falls_back_to_resolver_defaults() {
        // The endpoint default (-10) differs from the schema, which requires
        // the argument; the original server behaved the same way.
        let path = resolve("nina_start_cooling", &Map::new()).unwrap();
        assert_eq!(path, "equipment/camera/cooling?temperature=-10&duration=0");
    }

    #[test]
    fn null_argument_falls_back_to_default() {
        let path = resolve("nina_dither", &args(json!({"pixels": null}))).unwrap();
        assert_eq!(path, "equipment/guider/dither?pixels=5");
    }

    #[test]
    fn string_values_are_query_encoded() {
        let path = resolve(
            "nina_sequence_load",
            &args(json!({"filepath": "C:\\Sequences\\M42 LRGB.json"})),
        )
        .unwrap();
        assert_eq!(
            path,
            "sequence/load?filepath=C%3A%5CSequences%5CM42+LRGB.json"
        );
    }
}
