// Default values for the editor - these are the single source of truth for defaults
pub const DEFAULT_WORKFLOW_NAME: &str = "My New Workflow";

pub const DEFAULT_VARIABLES_JSON: &str = "{\n  \"topic\": \"the moon\",\n  \"style\": \"Dr. Seuss\"\n}";

/// Execution provider sent with every execute request.  Only one provider is
/// recognized until multi-provider selection lands in the side panel.
pub const DEFAULT_MODEL_ID: &str = "openai";

// Node-type tags understood by the palette / default-data factory
pub const NODE_TYPE_INPUT: &str = "input";
pub const NODE_TYPE_LLM: &str = "llmNode";

pub const DEFAULT_LLM_LABEL: &str = "New LLM Node";
pub const DEFAULT_LLM_PROMPT: &str = "Your prompt here...";

// Notification lifetime before auto-dismiss
pub const NOTIFICATION_TIMEOUT_MS: u32 = 4000;

// Node visual defaults used by the canvas renderer
pub const DEFAULT_NODE_WIDTH: f64 = 180.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 64.0;
