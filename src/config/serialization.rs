//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# rowscope configuration

# Rows in the generated dataset (env: ROWSCOPE_ROWS)
rows = {rows}

# Redraw tick in milliseconds when idle (env: ROWSCOPE_TICK_MS)
tick_ms = {tick_ms}

# Viewport behavior
[viewport]
# Fractional scrollbar on the right edge
scrollbar = {scrollbar}
# Rows requested by the first frame; corrected once the height is known
initial_height = {initial_height}
min_height = {min_height}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the TUI buffer)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            rows = self.rows,
            tick_ms = self.tick_ms,
            scrollbar = self.viewport.scrollbar,
            initial_height = self.viewport.initial_height,
            min_height = self.viewport.min_height,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
