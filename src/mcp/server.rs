//! MCP server for the electronics engineering knowledge base.
//!
//! Implements the MCP lifecycle over the stdio transport:
//!
//! 1. **Initialisation**: capability negotiation and version agreement
//! 2. **Operation**: `tools/list`, `tools/call`, `ping`
//! 3. **Shutdown**: EOF or signal
//!
//! All fourteen tools are pure functions over the embedded knowledge base,
//! so the server needs no per-session state beyond the lifecycle machine.
//! Tool failures become tool-error results (`is_error: true`) with a
//! leading `✗ `; they are never protocol-level errors.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::capacitor;
use crate::error::ToolError;
use crate::gpio;
use crate::mcp::protocol::{
    ErrorCode, IncomingMessage, JsonRpcError, JsonRpcErrorData, JsonRpcNotification,
    JsonRpcRequest, JsonRpcResponse, RequestId, MCP_PROTOCOL_VERSION, SERVER_NAME,
};
use crate::mcp::transport::StdioTransport;
use crate::resistor;
use crate::series::ESeries;

/// Instructions advertised to clients during initialisation.
const SERVER_INSTRUCTIONS: &str = "Electronics engineering reference server. \
    Resistor tools decode/encode color bands and find standard E-series values. \
    Capacitor tools compute reactance, RC time constants, LC resonance, and RC \
    filter component suggestions. GPIO tools answer pin capability questions \
    and detect pin conflicts for ESP32, Arduino UNO, and STM32 Blue Pill boards.";

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize received, waiting for initialized notification.
    Initialising,
    /// Ready for normal operation.
    Running,
    /// Shutdown in progress.
    ShuttingDown,
}

/// Server capabilities advertised during initialisation.
#[derive(Debug, Clone, Serialize)]
pub struct ServerCapabilities {
    /// Tool-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolCapabilities>,
}

impl Default for ServerCapabilities {
    fn default() -> Self {
        Self {
            tools: Some(ToolCapabilities::default()),
        }
    }
}

/// Tool-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolCapabilities {
    /// Whether the tool list can change during the session. It cannot: the
    /// knowledge base is embedded and read-only.
    #[serde(rename = "listChanged", skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if requires fn(&T) -> bool
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Server information for the initialisation response.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Parameters for the initialize request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Protocol version requested by the client.
    pub protocol_version: String,
}

/// A tool definition for the tools/list response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

/// Parameters for a tools/call request.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    /// Name of the tool to call.
    pub name: String,
    /// Arguments for the tool.
    #[serde(default)]
    pub arguments: Value,
}

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}

/// Result of a tool call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the tool call resulted in an error.
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
}

impl ToolCallResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates an error text result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }
}

/// Maps a domain failure to a tool-error result with the `✗ ` prefix.
fn tool_error(error: &ToolError) -> ToolCallResult {
    ToolCallResult::error(format!("✗ {error}"))
}

/// The electronics-mcp server.
pub struct McpServer {
    /// Current server state.
    state: ServerState,
    /// The transport layer.
    transport: StdioTransport,
    /// Negotiated protocol version (set after initialisation).
    protocol_version: Option<String>,
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl McpServer {
    /// Creates a new MCP server.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ServerState::AwaitingInit,
            transport: StdioTransport::new(),
            protocol_version: None,
        }
    }

    /// Returns the current server state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Runs the MCP server main loop with graceful shutdown handling.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.run_with_shutdown().await
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(unix)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).map_err(std::io::Error::other)?;
        let mut sigterm = signal(SignalKind::terminate()).map_err(std::io::Error::other)?;

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(windows)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Received Ctrl+C, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Handles the result from a transport read.
    ///
    /// Returns `true` if the server should shut down.
    async fn handle_transport_result(
        &mut self,
        line_result: std::io::Result<Option<String>>,
    ) -> std::io::Result<bool> {
        let Some(line) = line_result? else {
            self.state = ServerState::ShuttingDown;
            return Ok(true);
        };

        if line.trim().is_empty() {
            return Ok(false);
        }

        self.handle_line(&line).await?;

        Ok(self.state == ServerState::ShuttingDown)
    }

    /// Handles a single line of input.
    async fn handle_line(&mut self, line: &str) -> std::io::Result<()> {
        use crate::mcp::protocol::parse_message;

        match parse_message(line) {
            Ok(msg) => self.handle_message(msg).await,
            Err(error) => {
                self.transport.write_error(&error).await?;
                Ok(())
            }
        }
    }

    /// Handles a parsed incoming message.
    async fn handle_message(&mut self, msg: IncomingMessage) -> std::io::Result<()> {
        match msg {
            IncomingMessage::Request(req) => self.handle_request(req).await,
            IncomingMessage::Notification(ref notif) => {
                self.handle_notification(notif);
                Ok(())
            }
        }
    }

    /// Handles an incoming request.
    async fn handle_request(&mut self, req: JsonRpcRequest) -> std::io::Result<()> {
        let response = match req.method.as_str() {
            "initialize" => self.handle_initialize(&req),
            "tools/list" => self.handle_tools_list(&req),
            "tools/call" => self.handle_tools_call(&req),
            "ping" => Ok(Self::handle_ping(&req)),
            _ => Err(JsonRpcError::method_not_found(req.id.clone(), &req.method)),
        };

        match response {
            Ok(resp) => self.transport.write_response(&resp).await,
            Err(error) => self.transport.write_error(&error).await,
        }
    }

    /// Handles an incoming notification.
    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        if notif.method == "notifications/initialized" && self.state == ServerState::Initialising {
            tracing::debug!("Client initialised, server running");
            self.state = ServerState::Running;
        }
    }

    /// Handles the initialize request.
    fn handle_initialize(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcError::new(
                Some(req.id.clone()),
                JsonRpcErrorData::with_message(
                    ErrorCode::InvalidRequest,
                    "Server already initialised",
                ),
            ));
        }

        let params: Option<InitializeParams> = req
            .params
            .as_ref()
            .and_then(|p| serde_json::from_value(p.clone()).ok());

        // Echo the client's version when we support it, otherwise offer ours.
        let version = match params {
            Some(p) if p.protocol_version == MCP_PROTOCOL_VERSION => p.protocol_version,
            _ => MCP_PROTOCOL_VERSION.to_string(),
        };
        self.protocol_version = Some(version.clone());
        self.state = ServerState::Initialising;

        let result = json!({
            "protocolVersion": version,
            "capabilities": ServerCapabilities::default(),
            "serverInfo": ServerInfo::default(),
            "instructions": SERVER_INSTRUCTIONS,
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/list request.
    fn handle_tools_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let result = json!({
            "tools": Self::get_tool_definitions(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/call request.
    fn handle_tools_call(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: ToolCallParams = req
            .params
            .as_ref()
            .map(|p| serde_json::from_value(p.clone()))
            .transpose()
            .map_err(|e| {
                JsonRpcError::invalid_params(
                    req.id.clone(),
                    format!("Invalid tool call params: {e}"),
                )
            })?
            .ok_or_else(|| {
                JsonRpcError::invalid_params(req.id.clone(), "Missing tool call params")
            })?;

        let result = Self::dispatch(&params.name, &params.arguments);

        let result_value = serde_json::to_value(&result).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialise tool call result");
            JsonRpcError::new(
                Some(req.id.clone()),
                JsonRpcErrorData::with_message(
                    ErrorCode::InternalError,
                    "Internal error: failed to serialise result",
                ),
            )
        })?;

        Ok(JsonRpcResponse::success(req.id.clone(), result_value))
    }

    /// Dispatches a tool call by name.
    fn dispatch(name: &str, arguments: &Value) -> ToolCallResult {
        match name {
            // Resistor codec
            "decode_resistor_color_bands" => Self::call_decode_resistor_color_bands(arguments),
            "encode_resistor_value" => Self::call_encode_resistor_value(arguments),
            "find_standard_resistor" => Self::call_find_standard_resistor(arguments),
            // Capacitor kernel
            "calculate_capacitive_reactance" => Self::call_capacitive_reactance(arguments),
            "calculate_rc_time_constant" => Self::call_rc_time_constant(arguments),
            "calculate_resonant_frequency" => Self::call_resonant_frequency(arguments),
            "suggest_capacitor_for_filter" => Self::call_suggest_capacitor(arguments),
            // GPIO engine
            "get_pin_info" => Self::call_get_pin_info(arguments),
            "find_pwm_pins" => Self::call_find_pwm_pins(arguments),
            "find_adc_pins" => Self::call_find_adc_pins(arguments),
            "find_i2c_pins" => Self::call_find_i2c_pins(arguments),
            "find_spi_pins" => Self::call_find_spi_pins(arguments),
            "check_pin_conflict" => Self::call_check_pin_conflict(arguments),
            "generate_pin_diagram_ascii" => Self::call_generate_pin_diagram(arguments),
            _ => ToolCallResult::error(format!("✗ Unknown tool: {name}")),
        }
    }

    /// Handles the ping request.
    fn handle_ping(req: &JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(req.id.clone(), json!({}))
    }

    /// Ensures the server is in the Running state.
    fn require_running(&self, id: &RequestId) -> Result<(), JsonRpcError> {
        if self.state != ServerState::Running {
            return Err(JsonRpcError::new(
                Some(id.clone()),
                JsonRpcErrorData::with_message(ErrorCode::InvalidRequest, "Server not initialised"),
            ));
        }
        Ok(())
    }

    /// Returns the definitions of all fourteen tools.
    #[allow(clippy::too_many_lines)]
    fn get_tool_definitions() -> Vec<ToolDefinition> {
        let board_schema = json!({
            "type": "string",
            "description": "Board: 'ESP32', 'Arduino UNO'/'UNO', or 'STM32'/'Blue Pill' (case-insensitive)"
        });

        vec![
            // === Resistor codec ===
            ToolDefinition {
                name: "decode_resistor_color_bands".to_string(),
                description: Some(
                    "Decode resistor color bands to a resistance value and tolerance. \
                     Accepts 3 bands (digit, digit, multiplier - implies ±20%), 4 bands \
                     (digit, digit, multiplier, tolerance) or 5 bands (three digits, \
                     multiplier, tolerance). Colors are case-insensitive."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "bands": {
                            "type": "array",
                            "items": {"type": "string"},
                            "minItems": 3,
                            "maxItems": 5,
                            "description": "Color names in band order, e.g. [\"brown\", \"black\", \"red\", \"gold\"]"
                        }
                    },
                    "required": ["bands"]
                }),
            },
            ToolDefinition {
                name: "encode_resistor_value".to_string(),
                description: Some(
                    "Encode a resistance value into color bands. Off-grid values snap \
                     to the nearest representable code and the error is reported."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "resistance": {
                            "type": "number",
                            "description": "Resistance in ohms, e.g. 4700 for 4.7kΩ"
                        },
                        "tolerance": {
                            "type": "number",
                            "description": "Tolerance percent with a band color: 0.05, 0.1, 0.25, 0.5, 1, 2, 5, 10, or 20 (default 5)"
                        },
                        "prefer_5band": {
                            "type": "boolean",
                            "description": "Use the three-digit precision encoding (default false)"
                        }
                    },
                    "required": ["resistance"]
                }),
            },
            ToolDefinition {
                name: "find_standard_resistor".to_string(),
                description: Some(
                    "Find the nearest standard resistor value from an E-series (E12, \
                     E24 or E96), with nearby alternatives and the color code."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "target_value": {
                            "type": "number",
                            "description": "Target resistance in ohms"
                        },
                        "series": {
                            "type": "string",
                            "enum": ["E12", "E24", "E96"],
                            "description": "Preferred-value series (default E12)"
                        }
                    },
                    "required": ["target_value"]
                }),
            },
            // === Capacitor kernel ===
            ToolDefinition {
                name: "calculate_capacitive_reactance".to_string(),
                description: Some(
                    "Calculate capacitive reactance Xc = 1/(2πfC) at a frequency, and \
                     the AC current at the given voltage (1V reference by default)."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "capacitance": {
                            "type": "number",
                            "description": "Capacitance in farads, e.g. 1e-6 for 1µF"
                        },
                        "frequency": {
                            "type": "number",
                            "description": "Frequency in hertz"
                        },
                        "voltage": {
                            "type": "number",
                            "description": "Optional AC voltage for the current figure (default 1V)"
                        }
                    },
                    "required": ["capacitance", "frequency"]
                }),
            },
            ToolDefinition {
                name: "calculate_rc_time_constant".to_string(),
                description: Some(
                    "Calculate the RC time constant τ = R·C, the 1τ-5τ charging \
                     timeline, and the -3dB cutoff of the same RC pair."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "resistance": {
                            "type": "number",
                            "description": "Resistance in ohms"
                        },
                        "capacitance": {
                            "type": "number",
                            "description": "Capacitance in farads"
                        }
                    },
                    "required": ["resistance", "capacitance"]
                }),
            },
            ToolDefinition {
                name: "calculate_resonant_frequency".to_string(),
                description: Some(
                    "Calculate the LC resonant frequency f₀ = 1/(2π√(LC)), the \
                     reactance at resonance, and the characteristic impedance."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "inductance": {
                            "type": "number",
                            "description": "Inductance in henries, e.g. 1e-3 for 1mH"
                        },
                        "capacitance": {
                            "type": "number",
                            "description": "Capacitance in farads"
                        }
                    },
                    "required": ["inductance", "capacitance"]
                }),
            },
            ToolDefinition {
                name: "suggest_capacitor_for_filter".to_string(),
                description: Some(
                    "Suggest a standard E12 capacitor for an RC filter: computes the \
                     ideal C = 1/(2πR·fc), snaps it to the E12 grid, and reports the \
                     actual cutoff each candidate gives."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "resistance": {
                            "type": "number",
                            "description": "Filter resistance in ohms"
                        },
                        "cutoff_frequency": {
                            "type": "number",
                            "description": "Target -3dB cutoff frequency in hertz"
                        },
                        "filter_type": {
                            "type": "string",
                            "enum": ["low-pass", "high-pass"],
                            "description": "Filter topology (default low-pass)"
                        }
                    },
                    "required": ["resistance", "cutoff_frequency"]
                }),
            },
            // === GPIO engine ===
            ToolDefinition {
                name: "get_pin_info".to_string(),
                description: Some(
                    "Get the full record of one GPIO pin: label, capabilities, \
                     alternate functions, bus memberships, warnings and usage notes."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "board": board_schema.clone(),
                        "pin_number": {
                            "type": "integer",
                            "minimum": 0,
                            "description": "Pin number in the board's addressing scheme"
                        }
                    },
                    "required": ["board", "pin_number"]
                }),
            },
            ToolDefinition {
                name: "find_pwm_pins".to_string(),
                description: Some(
                    "List all PWM-capable pins of a board with their timer channels."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {"board": board_schema.clone()},
                    "required": ["board"]
                }),
            },
            ToolDefinition {
                name: "find_adc_pins".to_string(),
                description: Some(
                    "List all ADC-capable pins of a board with channel information. \
                     On ESP32 the list is split into WiFi-safe ADC1 and WiFi-blocked \
                     ADC2 sections."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {"board": board_schema.clone()},
                    "required": ["board"]
                }),
            },
            ToolDefinition {
                name: "find_i2c_pins".to_string(),
                description: Some(
                    "List I2C-capable pins of a board, grouped by bus with SDA/SCL \
                     roles and the conventional default assignment."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {"board": board_schema.clone()},
                    "required": ["board"]
                }),
            },
            ToolDefinition {
                name: "find_spi_pins".to_string(),
                description: Some(
                    "List SPI-capable pins of a board, grouped by bus (e.g. ESP32 \
                     VSPI vs HSPI) with MOSI/MISO/SCK/CS roles."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {"board": board_schema.clone()},
                    "required": ["board"]
                }),
            },
            ToolDefinition {
                name: "check_pin_conflict".to_string(),
                description: Some(
                    "Analyse a set of pins for conflicts: flash-reserved pins and \
                     shared exclusive functions (errors), strapping/SWD/USB/serial \
                     pins and the ESP32 ADC2-vs-WiFi exclusion (warnings), \
                     input-only pins and partial buses (info). Also offers safe \
                     alternative pins."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "board": board_schema.clone(),
                        "pin_numbers": {
                            "type": "array",
                            "items": {"type": "integer", "minimum": 0},
                            "description": "Pin numbers the design intends to use simultaneously"
                        }
                    },
                    "required": ["board", "pin_numbers"]
                }),
            },
            ToolDefinition {
                name: "generate_pin_diagram_ascii".to_string(),
                description: Some(
                    "Render a fixed-width ASCII pinout diagram of the board with pin \
                     labels, leading functions, and warning markers."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {"board": board_schema},
                    "required": ["board"]
                }),
            },
        ]
    }

    // ==================== Tool handlers ====================

    /// Decodes a band sequence into a resistance.
    fn call_decode_resistor_color_bands(arguments: &Value) -> ToolCallResult {
        let Some(bands_json) = arguments.get("bands").and_then(Value::as_array) else {
            return ToolCallResult::error("✗ Missing required parameter: bands");
        };

        let mut bands = Vec::with_capacity(bands_json.len());
        for entry in bands_json {
            let Some(color) = entry.as_str() else {
                return ToolCallResult::error("✗ Every band must be a color name string");
            };
            bands.push(color);
        }

        match resistor::decode(&bands) {
            Ok(decoded) => ToolCallResult::text(resistor::render::render_decoded(&decoded)),
            Err(e) => tool_error(&e),
        }
    }

    /// Encodes a resistance into color bands.
    fn call_encode_resistor_value(arguments: &Value) -> ToolCallResult {
        let Some(resistance) = arguments.get("resistance").and_then(Value::as_f64) else {
            return ToolCallResult::error("✗ Missing required parameter: resistance");
        };
        let tolerance = arguments
            .get("tolerance")
            .and_then(Value::as_f64)
            .unwrap_or(5.0);
        let five_band = arguments
            .get("prefer_5band")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        match resistor::encode(resistance, tolerance, five_band) {
            Ok(encoded) => ToolCallResult::text(resistor::render::render_encoded(&encoded)),
            Err(e) => tool_error(&e),
        }
    }

    /// Snaps a target resistance onto an E-series.
    fn call_find_standard_resistor(arguments: &Value) -> ToolCallResult {
        let Some(target) = arguments.get("target_value").and_then(Value::as_f64) else {
            return ToolCallResult::error("✗ Missing required parameter: target_value");
        };
        let series = match arguments.get("series").and_then(Value::as_str) {
            None => ESeries::E12,
            Some(label) => match ESeries::from_str_loose(label) {
                Some(series) => series,
                None => {
                    return ToolCallResult::error(format!(
                        "✗ Unknown series '{label}'. Expected E12, E24, or E96"
                    ))
                }
            },
        };

        match resistor::find_standard(target, series) {
            Ok(found) => ToolCallResult::text(resistor::render::render_standard(&found)),
            Err(e) => tool_error(&e),
        }
    }

    /// Computes capacitive reactance.
    fn call_capacitive_reactance(arguments: &Value) -> ToolCallResult {
        let Some(capacitance) = arguments.get("capacitance").and_then(Value::as_f64) else {
            return ToolCallResult::error("✗ Missing required parameter: capacitance");
        };
        let Some(frequency) = arguments.get("frequency").and_then(Value::as_f64) else {
            return ToolCallResult::error("✗ Missing required parameter: frequency");
        };
        let voltage = arguments.get("voltage").and_then(Value::as_f64);

        match capacitor::reactance(capacitance, frequency, voltage) {
            Ok(result) => ToolCallResult::text(capacitor::render::render_reactance(&result)),
            Err(e) => tool_error(&e),
        }
    }

    /// Computes the RC time constant.
    fn call_rc_time_constant(arguments: &Value) -> ToolCallResult {
        let Some(resistance) = arguments.get("resistance").and_then(Value::as_f64) else {
            return ToolCallResult::error("✗ Missing required parameter: resistance");
        };
        let Some(capacitance) = arguments.get("capacitance").and_then(Value::as_f64) else {
            return ToolCallResult::error("✗ Missing required parameter: capacitance");
        };

        match capacitor::time_constant(resistance, capacitance) {
            Ok(result) => ToolCallResult::text(capacitor::render::render_time_constant(&result)),
            Err(e) => tool_error(&e),
        }
    }

    /// Computes the LC resonant frequency.
    fn call_resonant_frequency(arguments: &Value) -> ToolCallResult {
        let Some(inductance) = arguments.get("inductance").and_then(Value::as_f64) else {
            return ToolCallResult::error("✗ Missing required parameter: inductance");
        };
        let Some(capacitance) = arguments.get("capacitance").and_then(Value::as_f64) else {
            return ToolCallResult::error("✗ Missing required parameter: capacitance");
        };

        match capacitor::resonant_frequency(inductance, capacitance) {
            Ok(result) => ToolCallResult::text(capacitor::render::render_resonance(&result)),
            Err(e) => tool_error(&e),
        }
    }

    /// Suggests a standard capacitor for an RC filter.
    fn call_suggest_capacitor(arguments: &Value) -> ToolCallResult {
        let Some(resistance) = arguments.get("resistance").and_then(Value::as_f64) else {
            return ToolCallResult::error("✗ Missing required parameter: resistance");
        };
        let Some(cutoff) = arguments.get("cutoff_frequency").and_then(Value::as_f64) else {
            return ToolCallResult::error("✗ Missing required parameter: cutoff_frequency");
        };
        let filter = match arguments.get("filter_type").and_then(Value::as_str) {
            None => capacitor::FilterType::LowPass,
            Some(label) => match capacitor::FilterType::from_str_loose(label) {
                Some(filter) => filter,
                None => {
                    return ToolCallResult::error(format!(
                        "✗ Unknown filter type '{label}'. Expected low-pass or high-pass"
                    ))
                }
            },
        };

        match capacitor::suggest_filter_capacitor(resistance, cutoff, filter) {
            Ok(result) => ToolCallResult::text(capacitor::render::render_filter(&result)),
            Err(e) => tool_error(&e),
        }
    }

    /// Parses the `board` argument shared by all GPIO tools.
    fn parse_board(arguments: &Value) -> Result<gpio::Board, ToolCallResult> {
        let Some(identifier) = arguments.get("board").and_then(Value::as_str) else {
            return Err(ToolCallResult::error("✗ Missing required parameter: board"));
        };
        gpio::resolve_board(identifier).map_err(|e| tool_error(&e))
    }

    /// Returns the full record of one pin.
    fn call_get_pin_info(arguments: &Value) -> ToolCallResult {
        let board = match Self::parse_board(arguments) {
            Ok(board) => board,
            Err(error) => return error,
        };
        let number = arguments
            .get("pin_number")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok());
        let Some(number) = number else {
            return ToolCallResult::error("✗ Missing or invalid parameter: pin_number");
        };

        match gpio::pin_info(board, number) {
            Ok(pin) => ToolCallResult::text(gpio::render::render_pin_info(board, pin)),
            Err(e) => tool_error(&e),
        }
    }

    /// Lists PWM-capable pins.
    fn call_find_pwm_pins(arguments: &Value) -> ToolCallResult {
        match Self::parse_board(arguments) {
            Ok(board) => {
                let pins = gpio::discover::pwm_pins(board);
                ToolCallResult::text(gpio::render::render_pwm_pins(board, &pins))
            }
            Err(error) => error,
        }
    }

    /// Lists ADC-capable pins.
    fn call_find_adc_pins(arguments: &Value) -> ToolCallResult {
        match Self::parse_board(arguments) {
            Ok(board) => {
                let pins = gpio::discover::adc_pins(board);
                ToolCallResult::text(gpio::render::render_adc_pins(board, &pins))
            }
            Err(error) => error,
        }
    }

    /// Lists I²C-capable pins grouped by bus.
    fn call_find_i2c_pins(arguments: &Value) -> ToolCallResult {
        match Self::parse_board(arguments) {
            Ok(board) => {
                let buses = gpio::discover::i2c_buses(board);
                ToolCallResult::text(gpio::render::render_i2c_pins(board, &buses))
            }
            Err(error) => error,
        }
    }

    /// Lists SPI-capable pins grouped by bus.
    fn call_find_spi_pins(arguments: &Value) -> ToolCallResult {
        match Self::parse_board(arguments) {
            Ok(board) => {
                let buses = gpio::discover::spi_buses(board);
                ToolCallResult::text(gpio::render::render_spi_pins(board, &buses))
            }
            Err(error) => error,
        }
    }

    /// Analyses a pin set for conflicts.
    fn call_check_pin_conflict(arguments: &Value) -> ToolCallResult {
        let board = match Self::parse_board(arguments) {
            Ok(board) => board,
            Err(error) => return error,
        };
        let Some(numbers_json) = arguments.get("pin_numbers").and_then(Value::as_array) else {
            return ToolCallResult::error("✗ Missing required parameter: pin_numbers");
        };

        let mut numbers = Vec::with_capacity(numbers_json.len());
        for entry in numbers_json {
            let number = entry.as_u64().and_then(|n| u32::try_from(n).ok());
            let Some(number) = number else {
                return ToolCallResult::error(
                    "✗ Every entry of pin_numbers must be a non-negative integer",
                );
            };
            numbers.push(number);
        }

        let report = gpio::conflict::check(board, &numbers);
        ToolCallResult::text(gpio::render::render_conflict(&report))
    }

    /// Renders the ASCII pinout diagram.
    fn call_generate_pin_diagram(arguments: &Value) -> ToolCallResult {
        match Self::parse_board(arguments) {
            Ok(board) => ToolCallResult::text(gpio::diagram::render(board)),
            Err(error) => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &ToolCallResult) -> &str {
        let ToolContent::Text { text } = &result.content[0];
        text
    }

    #[test]
    fn tool_definitions_valid() {
        let tools = McpServer::get_tool_definitions();
        assert_eq!(tools.len(), 14);

        let mut names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 14, "tool names must be unique");

        for tool in &tools {
            assert!(tool.input_schema.is_object());
            assert!(tool.description.is_some());
            assert_eq!(tool.input_schema["type"], "object");
        }
    }

    #[test]
    fn dispatch_unknown_tool_is_error() {
        let result = McpServer::dispatch("order_pizza", &json!({}));
        assert!(result.is_error);
        assert!(text_of(&result).starts_with('✗'));
    }

    #[test]
    fn decode_happy_path() {
        let result = McpServer::dispatch(
            "decode_resistor_color_bands",
            &json!({"bands": ["brown", "black", "red", "gold"]}),
        );
        assert!(!result.is_error);
        let text = text_of(&result);
        assert!(text.contains("1.00kΩ"));
        assert!(text.contains("±5%"));
    }

    #[test]
    fn decode_invalid_color_is_tool_error() {
        let result = McpServer::dispatch(
            "decode_resistor_color_bands",
            &json!({"bands": ["gold", "black", "red", "gold"]}),
        );
        assert!(result.is_error);
        assert!(text_of(&result).starts_with("✗ "));
    }

    #[test]
    fn encode_defaults_apply() {
        let result =
            McpServer::dispatch("encode_resistor_value", &json!({"resistance": 4700}));
        assert!(!result.is_error);
        let text = text_of(&result);
        for color in ["Yellow", "Violet", "Red", "Gold"] {
            assert!(text.contains(color), "missing {color}");
        }
    }

    #[test]
    fn find_standard_exact_match() {
        let result = McpServer::dispatch(
            "find_standard_resistor",
            &json!({"target_value": 3300, "series": "E12"}),
        );
        assert!(!result.is_error);
        let text = text_of(&result);
        assert!(text.contains("3.30kΩ"));
        assert!(text.contains("+0.00%"));
    }

    #[test]
    fn rc_time_constant_scenario() {
        let result = McpServer::dispatch(
            "calculate_rc_time_constant",
            &json!({"resistance": 10000, "capacitance": 1e-4}),
        );
        assert!(!result.is_error);
        let text = text_of(&result);
        assert!(text.contains("1.00s"));
        assert!(text.contains("63.2%"));
    }

    #[test]
    fn reactance_rejects_zero() {
        let result = McpServer::dispatch(
            "calculate_capacitive_reactance",
            &json!({"capacitance": 0, "frequency": 1000}),
        );
        assert!(result.is_error);
        assert!(text_of(&result).contains("greater than zero"));
    }

    #[test]
    fn filter_scenario() {
        let result = McpServer::dispatch(
            "suggest_capacitor_for_filter",
            &json!({"resistance": 10000, "cutoff_frequency": 1000}),
        );
        assert!(!result.is_error);
        let text = text_of(&result);
        assert!(text.contains("15.0nF"));
    }

    #[test]
    fn pin_info_aliases_and_errors() {
        let result = McpServer::dispatch(
            "get_pin_info",
            &json!({"board": "blue pill", "pin_number": 13}),
        );
        assert!(!result.is_error);
        assert!(text_of(&result).contains("SWDIO"));

        let result = McpServer::dispatch(
            "get_pin_info",
            &json!({"board": "Z80", "pin_number": 1}),
        );
        assert!(result.is_error);
        assert!(text_of(&result).contains("unknown board"));
    }

    #[test]
    fn conflict_scenario() {
        let result = McpServer::dispatch(
            "check_pin_conflict",
            &json!({"board": "ESP32", "pin_numbers": [0, 2, 6, 12]}),
        );
        assert!(!result.is_error);
        let text = text_of(&result);
        assert!(text.contains("ERRORS"));
        assert!(text.contains("WARNINGS"));
        assert!(text.contains("WiFi"));
    }

    #[test]
    fn diagram_renders_for_all_aliases() {
        for board in ["ESP32", "UNO", "BluePill"] {
            let result =
                McpServer::dispatch("generate_pin_diagram_ascii", &json!({"board": board}));
            assert!(!result.is_error, "{board} diagram failed");
        }
    }

    #[test]
    fn lifecycle_gates_tool_calls() {
        let server = McpServer::new();
        assert_eq!(server.state(), ServerState::AwaitingInit);

        let req = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: RequestId::Number(1),
            method: "tools/list".to_string(),
            params: None,
        };
        assert!(server.handle_tools_list(&req).is_err());
    }

    #[test]
    fn initialize_negotiates_version() {
        let mut server = McpServer::new();
        let req = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: RequestId::Number(1),
            method: "initialize".to_string(),
            params: Some(json!({"protocolVersion": MCP_PROTOCOL_VERSION})),
        };
        let response = server.handle_initialize(&req).unwrap();
        assert_eq!(server.state(), ServerState::Initialising);
        assert_eq!(response.result["protocolVersion"], MCP_PROTOCOL_VERSION);

        // A second initialize is a protocol error.
        assert!(server.handle_initialize(&req).is_err());
    }
}
