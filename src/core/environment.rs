//! Host environment and process introspection.

/// Value of the environment variable `name`, or an empty string when it is
/// unset or not valid Unicode.
pub fn get_environment_variable(name: &str) -> String {
    match std::env::var(name) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("environment variable '{}' unavailable: {}", name, err);
            String::new()
        }
    }
}

pub fn is_process_32_bit() -> bool {
    cfg!(target_pointer_width = "32")
}

pub fn is_process_64_bit() -> bool {
    cfg!(target_pointer_width = "64")
}

/// True when built with debug assertions.
pub fn is_configuration_debug() -> bool {
    cfg!(debug_assertions)
}

pub fn is_configuration_release() -> bool {
    !is_configuration_debug()
}

pub fn is_processor_x86() -> bool {
    cfg!(target_arch = "x86")
}

pub fn is_processor_x64() -> bool {
    cfg!(target_arch = "x86_64")
}

pub fn line_separator() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}
