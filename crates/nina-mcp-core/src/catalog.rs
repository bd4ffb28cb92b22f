//! Static catalog of NINA Advanced API tools.
//!
//! Every tool the gateway advertises is one [`ToolSpec`] entry in [`TOOLS`]:
//! the MCP-facing descriptor (name, description, parameter schema) and the
//! endpoint template (path plus query-argument table) live side by side in
//! the same record. The table is created once, never mutated, and interpreted
//! by the generic resolver in [`crate::resolve`].

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

/// JSON type of a tool parameter, as advertised in the input schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
}

impl ParamKind {
    /// The JSON Schema type keyword for this kind.
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
        }
    }
}

/// A default value carried by the table.
///
/// Used both for schema defaults (advertised to the client) and for resolver
/// fallbacks (substituted when an argument is absent). The NINA endpoint map
/// only ever defaults to integers, booleans, and strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Int(i64),
    Bool(bool),
    Str(&'static str),
}

impl DefaultValue {
    /// Render the default the way it appears in a query string.
    ///
    /// Booleans always serialize as lowercase `true`/`false`.
    pub fn render(&self) -> String {
        match self {
            DefaultValue::Int(i) => i.to_string(),
            DefaultValue::Bool(b) => b.to_string(),
            DefaultValue::Str(s) => (*s).to_string(),
        }
    }

    /// The JSON value advertised as the schema `default`.
    pub fn to_json(&self) -> Value {
        match self {
            DefaultValue::Int(i) => Value::from(*i),
            DefaultValue::Bool(b) => Value::from(*b),
            DefaultValue::Str(s) => Value::from(*s),
        }
    }
}

/// One named parameter in a tool's input schema.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub required: bool,
    /// Schema default advertised to the client, if the parameter is optional.
    pub default: Option<DefaultValue>,
}

impl ParamSpec {
    pub const fn required(
        name: &'static str,
        kind: ParamKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            description,
            required: true,
            default: None,
        }
    }

    pub const fn optional(
        name: &'static str,
        kind: ParamKind,
        description: &'static str,
        default: DefaultValue,
    ) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
            default: Some(default),
        }
    }
}

/// One query-string pair in a tool's endpoint template.
///
/// `key` is the name on the wire; `arg` is the invocation argument that
/// supplies the value. The two differ where NINA's API and the tool schema
/// disagree (`device_id` becomes `to`, `ra` becomes `rightascension`, and
/// `nina_set_binning` feeds one argument into both `x` and `y`).
#[derive(Debug, Clone, Copy)]
pub struct QueryArg {
    pub key: &'static str,
    pub arg: &'static str,
    /// Substituted when the argument is absent from the invocation.
    pub fallback: DefaultValue,
    /// Drop the pair entirely when the rendered value is empty.
    pub omit_if_empty: bool,
}

impl QueryArg {
    pub const fn new(key: &'static str, arg: &'static str, fallback: DefaultValue) -> Self {
        Self {
            key,
            arg,
            fallback,
            omit_if_empty: false,
        }
    }

    /// A pair that vanishes when its value renders empty, query separator
    /// included. NINA's autofocus endpoint rejects an empty `method`, so the
    /// original server omitted it; we preserve that.
    pub const fn omitted_when_empty(key: &'static str, arg: &'static str) -> Self {
        Self {
            key,
            arg,
            fallback: DefaultValue::Str(""),
            omit_if_empty: true,
        }
    }
}

/// A complete tool descriptor plus its endpoint template.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    /// Fixed path segments relative to the API base, never encoded.
    pub path: &'static str,
    pub query: &'static [QueryArg],
}

const DEVICE_ID_PARAM: &[ParamSpec] = &[ParamSpec::required(
    "device_id",
    ParamKind::String,
    "Device ID to connect to",
)];

const CONNECT_QUERY: &[QueryArg] = &[QueryArg::new("to", "device_id", DefaultValue::Str(""))];

impl ToolSpec {
    /// A tool with no parameters: fixed path, empty query.
    const fn bare(name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self {
            name,
            description,
            params: &[],
            path,
            query: &[],
        }
    }

    /// A device connect tool: one required `device_id`, sent as `to=`.
    const fn connect(name: &'static str, description: &'static str, path: &'static str) -> Self {
        Self {
            name,
            description,
            params: DEVICE_ID_PARAM,
            path,
            query: CONNECT_QUERY,
        }
    }

    /// Render this tool's parameter specs as a JSON Schema object.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        for param in self.params {
            let mut prop = Map::new();
            prop.insert("type".into(), Value::from(param.kind.json_type()));
            prop.insert("description".into(), Value::from(param.description));
            if let Some(default) = param.default {
                prop.insert("default".into(), default.to_json());
            }
            properties.insert(param.name.to_string(), Value::Object(prop));
        }
        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::from(p.name))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), Value::from("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), Value::Array(required));
        schema
    }
}

/// The full tool table, grouped by equipment area like NINA's own API.
pub static TOOLS: &[ToolSpec] = &[
    // System
    ToolSpec::bare("nina_get_version", "Get NINA application version", "version"),
    // Camera
    ToolSpec::connect(
        "nina_connect_camera",
        "Connect to a camera device",
        "equipment/camera/connect",
    ),
    ToolSpec::bare(
        "nina_disconnect_camera",
        "Disconnect the camera",
        "equipment/camera/disconnect",
    ),
    ToolSpec::bare(
        "nina_get_camera_info",
        "Get camera information and status",
        "equipment/camera/info",
    ),
    ToolSpec::bare(
        "nina_list_cameras",
        "List all available cameras",
        "equipment/camera/list",
    ),
    ToolSpec {
        name: "nina_capture_image",
        description: "Capture an image with the camera",
        params: &[
            ParamSpec::required(
                "exposure_time",
                ParamKind::Number,
                "Exposure time in seconds",
            ),
            ParamSpec::optional(
                "binning",
                ParamKind::Integer,
                "Binning factor (1, 2, 3, 4)",
                DefaultValue::Int(1),
            ),
            ParamSpec::optional("gain", ParamKind::Integer, "Gain value", DefaultValue::Int(0)),
        ],
        path: "equipment/camera/capture",
        query: &[
            QueryArg::new("exposuretime", "exposure_time", DefaultValue::Int(1)),
            QueryArg::new("binning", "binning", DefaultValue::Int(1)),
            QueryArg::new("gain", "gain", DefaultValue::Int(0)),
        ],
    },
    ToolSpec {
        name: "nina_start_cooling",
        description: "Start camera cooling to target temperature",
        params: &[
            ParamSpec::required(
                "temperature",
                ParamKind::Number,
                "Target temperature in Celsius",
            ),
            ParamSpec::optional(
                "duration",
                ParamKind::Integer,
                "Duration in minutes",
                DefaultValue::Int(0),
            ),
        ],
        path: "equipment/camera/cooling",
        query: &[
            QueryArg::new("temperature", "temperature", DefaultValue::Int(-10)),
            QueryArg::new("duration", "duration", DefaultValue::Int(0)),
        ],
    },
    ToolSpec::bare(
        "nina_stop_cooling",
        "Stop camera cooling",
        "equipment/camera/warmup",
    ),
    ToolSpec {
        name: "nina_set_binning",
        description: "Set camera binning",
        params: &[ParamSpec::required(
            "binning",
            ParamKind::Integer,
            "Binning factor (1, 2, 3, 4)",
        )],
        path: "equipment/camera/binning",
        // One binning argument drives both axes.
        query: &[
            QueryArg::new("x", "binning", DefaultValue::Int(1)),
            QueryArg::new("y", "binning", DefaultValue::Int(1)),
        ],
    },
    ToolSpec {
        name: "nina_control_dew_heater",
        description: "Control camera dew heater",
        params: &[ParamSpec::required(
            "on",
            ParamKind::Boolean,
            "Turn heater on (true) or off (false)",
        )],
        path: "equipment/camera/dew-heater",
        query: &[QueryArg::new("on", "on", DefaultValue::Bool(false))],
    },
    ToolSpec {
        name: "nina_set_gain",
        description: "Set camera gain",
        params: &[ParamSpec::required("gain", ParamKind::Integer, "Gain value")],
        path: "equipment/camera/gain",
        query: &[QueryArg::new("gain", "gain", DefaultValue::Int(0))],
    },
    ToolSpec {
        name: "nina_set_offset",
        description: "Set camera offset",
        params: &[ParamSpec::required(
            "offset",
            ParamKind::Integer,
            "Offset value",
        )],
        path: "equipment/camera/offset",
        query: &[QueryArg::new("offset", "offset", DefaultValue::Int(0))],
    },
    ToolSpec {
        name: "nina_start_warming",
        description: "Start warming camera to ambient temperature",
        params: &[ParamSpec::required(
            "duration",
            ParamKind::Integer,
            "Warming duration in minutes",
        )],
        path: "equipment/camera/warmup",
        query: &[QueryArg::new("duration", "duration", DefaultValue::Int(10))],
    },
    // Mount
    ToolSpec::connect(
        "nina_connect_telescope",
        "Connect to telescope mount",
        "equipment/telescope/connect",
    ),
    ToolSpec::bare(
        "nina_disconnect_telescope",
        "Disconnect telescope mount",
        "equipment/telescope/disconnect",
    ),
    ToolSpec::bare(
        "nina_get_telescope_info",
        "Get telescope mount information and coordinates",
        "equipment/telescope/info",
    ),
    ToolSpec::bare(
        "nina_list_telescopes",
        "List all available telescope mounts",
        "equipment/telescope/list",
    ),
    ToolSpec {
        name: "nina_slew_telescope",
        description: "Slew telescope to coordinates",
        params: &[
            ParamSpec::required("ra", ParamKind::Number, "Right Ascension in hours (0-24)"),
            ParamSpec::required(
                "dec",
                ParamKind::Number,
                "Declination in degrees (-90 to +90)",
            ),
        ],
        path: "equipment/telescope/slew",
        query: &[
            QueryArg::new("rightascension", "ra", DefaultValue::Int(0)),
            QueryArg::new("declination", "dec", DefaultValue::Int(0)),
        ],
    },
    ToolSpec::bare(
        "nina_park_telescope",
        "Park the telescope mount",
        "equipment/telescope/park",
    ),
    ToolSpec::bare(
        "nina_unpark_telescope",
        "Unpark the telescope mount",
        "equipment/telescope/unpark",
    ),
    ToolSpec::bare(
        "nina_stop_telescope",
        "Stop telescope movement immediately",
        "equipment/telescope/abort-slew",
    ),
    // Focuser
    ToolSpec::connect(
        "nina_connect_focuser",
        "Connect to focuser",
        "equipment/focuser/connect",
    ),
    ToolSpec::bare(
        "nina_disconnect_focuser",
        "Disconnect focuser",
        "equipment/focuser/disconnect",
    ),
    ToolSpec::bare(
        "nina_get_focuser_info",
        "Get focuser position and status",
        "equipment/focuser/info",
    ),
    ToolSpec::bare(
        "nina_list_focusers",
        "List all available focusers",
        "equipment/focuser/list",
    ),
    ToolSpec {
        name: "nina_move_focuser",
        description: "Move focuser to absolute position",
        params: &[ParamSpec::required(
            "position",
            ParamKind::Integer,
            "Target position",
        )],
        path: "equipment/focuser/move",
        query: &[QueryArg::new("position", "position", DefaultValue::Int(0))],
    },
    ToolSpec {
        name: "nina_start_autofocus",
        description: "Start autofocus routine",
        params: &[ParamSpec::optional(
            "method",
            ParamKind::String,
            "Autofocus method",
            DefaultValue::Str(""),
        )],
        path: "equipment/focuser/autofocus",
        query: &[QueryArg::omitted_when_empty("method", "method")],
    },
    ToolSpec::bare(
        "nina_cancel_autofocus",
        "Cancel running autofocus",
        "equipment/focuser/autofocus-cancel",
    ),
    ToolSpec::bare(
        "nina_get_autofocus_status",
        "Get autofocus routine status",
        "equipment/focuser/autofocus-status",
    ),
    ToolSpec::bare(
        "nina_halt_focuser",
        "Halt focuser movement immediately",
        "equipment/focuser/halt",
    ),
    // Filter wheel
    ToolSpec::connect(
        "nina_connect_filterwheel",
        "Connect to filter wheel",
        "equipment/filterwheel/connect",
    ),
    ToolSpec::bare(
        "nina_disconnect_filterwheel",
        "Disconnect filter wheel",
        "equipment/filterwheel/disconnect",
    ),
    ToolSpec::bare(
        "nina_get_filterwheel_info",
        "Get filter wheel information and current filter",
        "equipment/filterwheel/info",
    ),
    ToolSpec::bare(
        "nina_list_filterwheels",
        "List all available filter wheels",
        "equipment/filterwheel/list",
    ),
    ToolSpec {
        name: "nina_change_filter",
        description: "Change to specified filter",
        params: &[ParamSpec::required(
            "filter",
            ParamKind::String,
            "Filter name",
        )],
        path: "equipment/filterwheel/set-filter",
        query: &[QueryArg::new("filter", "filter", DefaultValue::Str(""))],
    },
    // Rotator
    ToolSpec::connect(
        "nina_connect_rotator",
        "Connect to rotator",
        "equipment/rotator/connect",
    ),
    ToolSpec::bare(
        "nina_disconnect_rotator",
        "Disconnect rotator",
        "equipment/rotator/disconnect",
    ),
    ToolSpec::bare(
        "nina_list_rotators",
        "List all available rotators",
        "equipment/rotator/list",
    ),
    ToolSpec::bare(
        "nina_get_rotator_info",
        "Get rotator angle and status",
        "equipment/rotator/info",
    ),
    ToolSpec {
        name: "nina_move_rotator",
        description: "Move rotator to angle",
        params: &[
            ParamSpec::required("position", ParamKind::Number, "Target angle in degrees"),
            ParamSpec::optional(
                "relative",
                ParamKind::Boolean,
                "Relative movement",
                DefaultValue::Bool(false),
            ),
        ],
        path: "equipment/rotator/move",
        query: &[
            QueryArg::new("position", "position", DefaultValue::Int(0)),
            QueryArg::new("relative", "relative", DefaultValue::Bool(false)),
        ],
    },
    ToolSpec::bare(
        "nina_halt_rotator",
        "Halt rotator movement",
        "equipment/rotator/halt",
    ),
    ToolSpec {
        name: "nina_sync_rotator",
        description: "Sync rotator to mechanical position",
        params: &[ParamSpec::required(
            "position",
            ParamKind::Number,
            "Mechanical position",
        )],
        path: "equipment/rotator/sync",
        query: &[QueryArg::new(
            "mechanicalposition",
            "position",
            DefaultValue::Int(0),
        )],
    },
    ToolSpec {
        name: "nina_set_rotator_reverse",
        description: "Set rotator reverse direction",
        params: &[ParamSpec::required(
            "reverse",
            ParamKind::Boolean,
            "Reverse direction",
        )],
        path: "equipment/rotator/reverse",
        query: &[QueryArg::new("reverse", "reverse", DefaultValue::Bool(false))],
    },
    // Flat panel
    ToolSpec::connect(
        "nina_connect_flatpanel",
        "Connect to flat panel",
        "equipment/flatdevice/connect",
    ),
    ToolSpec::bare(
        "nina_disconnect_flatpanel",
        "Disconnect flat panel",
        "equipment/flatdevice/disconnect",
    ),
    ToolSpec::bare(
        "nina_list_flatpanels",
        "List all available flat panels",
        "equipment/flatdevice/list",
    ),
    ToolSpec::bare(
        "nina_get_flatpanel_info",
        "Get flat panel status",
        "equipment/flatdevice/info",
    ),
    ToolSpec {
        name: "nina_set_flatpanel_light",
        description: "Control flat panel light",
        params: &[ParamSpec::required(
            "power",
            ParamKind::Boolean,
            "Turn light on (true) or off (false)",
        )],
        path: "equipment/flatdevice/set-light",
        query: &[QueryArg::new("power", "power", DefaultValue::Bool(false))],
    },
    ToolSpec {
        name: "nina_set_flatpanel_cover",
        description: "Control flat panel cover",
        params: &[ParamSpec::required(
            "open",
            ParamKind::Boolean,
            "Open cover (true) or close (false)",
        )],
        path: "equipment/flatdevice/set-cover",
        query: &[QueryArg::new("open", "open", DefaultValue::Bool(false))],
    },
    ToolSpec {
        name: "nina_set_flatpanel_brightness",
        description: "Set flat panel brightness",
        params: &[ParamSpec::required(
            "brightness",
            ParamKind::Integer,
            "Brightness value (0-100)",
        )],
        path: "equipment/flatdevice/set-brightness",
        query: &[QueryArg::new(
            "brightness",
            "brightness",
            DefaultValue::Int(50),
        )],
    },
    // Switch
    ToolSpec::connect(
        "nina_connect_switch",
        "Connect to switch device",
        "equipment/switch/connect",
    ),
    ToolSpec::bare(
        "nina_disconnect_switch",
        "Disconnect switch device",
        "equipment/switch/disconnect",
    ),
    ToolSpec::bare(
        "nina_list_switches",
        "List all available switches",
        "equipment/switch/list",
    ),
    ToolSpec::bare(
        "nina_get_switch_channels",
        "Get available switch channels",
        "equipment/switch/channels",
    ),
    ToolSpec {
        name: "nina_set_switch",
        description: "Set switch channel value",
        params: &[
            ParamSpec::required("index", ParamKind::Integer, "Channel index"),
            ParamSpec::required("value", ParamKind::Number, "Value to set"),
        ],
        path: "equipment/switch/set",
        query: &[
            QueryArg::new("index", "index", DefaultValue::Int(0)),
            QueryArg::new("value", "value", DefaultValue::Int(0)),
        ],
    },
    // Weather
    ToolSpec::connect(
        "nina_connect_weather",
        "Connect to weather station",
        "equipment/weather/connect",
    ),
    ToolSpec::bare(
        "nina_disconnect_weather",
        "Disconnect weather station",
        "equipment/weather/disconnect",
    ),
    ToolSpec::bare(
        "nina_get_weather_info",
        "Get current weather data",
        "equipment/weather/info",
    ),
    ToolSpec::bare(
        "nina_list_weather_sources",
        "List all available weather sources",
        "equipment/weather/list",
    ),
    // Safety monitor
    ToolSpec::connect(
        "nina_connect_safetymonitor",
        "Connect to safety monitor",
        "equipment/safetymonitor/connect",
    ),
    ToolSpec::bare(
        "nina_disconnect_safetymonitor",
        "Disconnect safety monitor",
        "equipment/safetymonitor/disconnect",
    ),
    ToolSpec::bare(
        "nina_get_safetymonitor_info",
        "Get safety monitor status",
        "equipment/safetymonitor/info",
    ),
    ToolSpec::bare(
        "nina_list_safetymonitors",
        "List all available safety monitors",
        "equipment/safetymonitor/list",
    ),
    // Guider
    ToolSpec::connect(
        "nina_connect_guider",
        "Connect to guider",
        "equipment/guider/connect",
    ),
    ToolSpec::bare(
        "nina_disconnect_guider",
        "Disconnect guider",
        "equipment/guider/disconnect",
    ),
    ToolSpec::bare(
        "nina_get_guider_info",
        "Get guider status",
        "equipment/guider/info",
    ),
    ToolSpec::bare(
        "nina_list_guiders",
        "List all available guiders",
        "equipment/guider/list",
    ),
    ToolSpec::bare(
        "nina_start_guiding",
        "Start guiding",
        "equipment/guider/start-guiding",
    ),
    ToolSpec::bare(
        "nina_stop_guiding",
        "Stop guiding",
        "equipment/guider/stop-guiding",
    ),
    ToolSpec {
        name: "nina_dither",
        description: "Dither the guider",
        params: &[ParamSpec::required(
            "pixels",
            ParamKind::Number,
            "Dither amount in pixels",
        )],
        path: "equipment/guider/dither",
        query: &[QueryArg::new("pixels", "pixels", DefaultValue::Int(5))],
    },
    // Dome
    ToolSpec::connect(
        "nina_connect_dome",
        "Connect to dome",
        "equipment/dome/connect",
    ),
    ToolSpec::bare(
        "nina_disconnect_dome",
        "Disconnect dome",
        "equipment/dome/disconnect",
    ),
    ToolSpec::bare("nina_get_dome_info", "Get dome status", "equipment/dome/info"),
    ToolSpec::bare(
        "nina_list_domes",
        "List all available domes",
        "equipment/dome/list",
    ),
    ToolSpec::bare(
        "nina_open_dome_shutter",
        "Open dome shutter",
        "equipment/dome/open-shutter",
    ),
    ToolSpec::bare(
        "nina_close_dome_shutter",
        "Close dome shutter",
        "equipment/dome/close-shutter",
    ),
    ToolSpec {
        name: "nina_slew_dome",
        description: "Slew dome to azimuth",
        params: &[ParamSpec::required(
            "azimuth",
            ParamKind::Number,
            "Azimuth in degrees (0-360)",
        )],
        path: "equipment/dome/slew",
        query: &[QueryArg::new("azimuth", "azimuth", DefaultValue::Int(0))],
    },
    // Sequence
    ToolSpec {
        name: "nina_sequence_start",
        description: "Start the current sequence",
        params: &[ParamSpec::optional(
            "skipValidation",
            ParamKind::Boolean,
            "Skip validation",
            DefaultValue::Bool(false),
        )],
        path: "sequence/start",
        query: &[QueryArg::new(
            "skipValidation",
            "skipValidation",
            DefaultValue::Bool(false),
        )],
    },
    ToolSpec::bare(
        "nina_sequence_stop",
        "Stop the running sequence",
        "sequence/stop",
    ),
    ToolSpec {
        name: "nina_sequence_load",
        description: "Load a sequence from file",
        params: &[ParamSpec::required(
            "filepath",
            ParamKind::String,
            "Path to sequence file",
        )],
        path: "sequence/load",
        query: &[QueryArg::new("filepath", "filepath", DefaultValue::Str(""))],
    },
    ToolSpec::bare("nina_sequence_json", "Get sequence as JSON", "sequence/json"),
    // Plate solving
    ToolSpec {
        name: "nina_platesolve_capsolve",
        description: "Capture image and solve plate",
        params: &[ParamSpec::optional(
            "blind",
            ParamKind::Boolean,
            "Use blind solve",
            DefaultValue::Bool(false),
        )],
        path: "plate-solve/capsolve",
        query: &[QueryArg::new("blind", "blind", DefaultValue::Bool(false))],
    },
    ToolSpec {
        name: "nina_platesolve_sync",
        description: "Plate solve and sync mount",
        params: &[ParamSpec::optional(
            "blind",
            ParamKind::Boolean,
            "Use blind solve",
            DefaultValue::Bool(false),
        )],
        path: "plate-solve/sync",
        query: &[QueryArg::new("blind", "blind", DefaultValue::Bool(false))],
    },
    ToolSpec {
        name: "nina_platesolve_center",
        description: "Center on coordinates using plate solving",
        params: &[
            ParamSpec::required("ra", ParamKind::Number, "Right Ascension in hours"),
            ParamSpec::required("dec", ParamKind::Number, "Declination in degrees"),
        ],
        path: "plate-solve/center",
        query: &[
            QueryArg::new("rightascension", "ra", DefaultValue::Int(0)),
            QueryArg::new("declination", "dec", DefaultValue::Int(0)),
        ],
    },
    // Framing assistant
    ToolSpec::bare(
        "nina_framing_get_info",
        "Get framing assistant information",
        "framing/info",
    ),
    ToolSpec {
        name: "nina_framing_set_source",
        description: "Set framing target source",
        params: &[ParamSpec::required(
            "source",
            ParamKind::String,
            "Target name or coordinates",
        )],
        path: "framing/set-source",
        query: &[QueryArg::new("source", "source", DefaultValue::Str(""))],
    },
    ToolSpec::bare("nina_framing_slew", "Slew to framing target", "framing/slew"),
    // Utility
    ToolSpec::bare("nina_time_now", "Get current system time", "time/now"),
    ToolSpec {
        name: "nina_wait",
        description: "Wait for specified duration",
        params: &[ParamSpec::required(
            "seconds",
            ParamKind::Integer,
            "Seconds to wait",
        )],
        path: "time/wait",
        query: &[QueryArg::new("seconds", "seconds", DefaultValue::Int(1))],
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static ToolSpec>> =
    Lazy::new(|| TOOLS.iter().map(|tool| (tool.name, tool)).collect());

/// The full catalog in declaration order. Pure and deterministic.
pub fn all() -> &'static [ToolSpec] {
    TOOLS
}

/// Look up a tool by name.
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    INDEX.get(name).copied()
}
