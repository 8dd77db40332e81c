//! Shared WGSL shader library.
//!
//! Every scene's vertex and fragment entry points live in one module. Scenes
//! refer to them by name, so the names are a contract checked here rather
//! than by the compiler.

use wgpu::{Device, ShaderModule};

const LIBRARY_SOURCE: &str = include_str!("shaders/library.wgsl");

/// The compiled-in shader library source.
#[derive(Debug, Clone, Copy)]
pub struct ShaderLibrary {
    source: &'static str,
}

impl Default for ShaderLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderLibrary {
    pub fn new() -> Self {
        Self {
            source: LIBRARY_SOURCE,
        }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Names of all `@vertex` and `@fragment` functions.
    ///
    /// Expects the stage attribute at the start of a line, followed by
    /// `fn name(` on the same line or a later one. Line comments are ignored.
    pub fn entry_points(&self) -> Vec<&'static str> {
        scan_entry_points(self.source)
    }

    pub fn has_entry_point(&self, name: &str) -> bool {
        self.entry_points().contains(&name)
    }

    pub fn create_module(&self, device: &Device) -> ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("playground_shader_library"),
            source: wgpu::ShaderSource::Wgsl(self.source.into()),
        })
    }
}

fn scan_entry_points(source: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut pending_stage = false;
    for line in source.lines() {
        let code = line.split("//").next().unwrap_or_default().trim();
        if code.starts_with("@vertex") || code.starts_with("@fragment") {
            pending_stage = true;
        }
        if !pending_stage {
            continue;
        }
        if let Some(rest) = code.split("fn ").nth(1) {
            if let Some(name) = rest.split('(').next() {
                names.push(name.trim());
            }
            pending_stage = false;
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points_listed() {
        let library = ShaderLibrary::new();
        let names = library.entry_points();
        assert!(names.contains(&"repeating_cirlces_vertex"));
        assert!(names.contains(&"repeating_circles_fragment"));
        // Helpers without a stage attribute are not entry points.
        assert!(!library.has_entry_point("fullscreen_vertex"));
    }

    #[test]
    fn test_scan_skips_comments() {
        let source = "@vertex // fn not_this(\n\
                      fn real_vertex(@builtin(vertex_index) i: u32) {}\n\
                      // @fragment\n\
                      fn helper() {}\n\
                      @fragment fn real_fragment() {}\n";
        assert_eq!(scan_entry_points(source), ["real_vertex", "real_fragment"]);
    }
}
