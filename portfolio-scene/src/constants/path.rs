/// Portfolio manifest, relative to the asset root.
pub const PORTFOLIO_MANIFEST_PATH: &str = "site.portfolio.json";

/// Asset extension registered with the JSON loader.
pub const PORTFOLIO_MANIFEST_EXTENSION: &str = "portfolio.json";

/// Canvas selector the wasm build renders into.
pub const CANVAS_SELECTOR: &str = "#portfolio";

pub const LOG_FILTER: &str = "wgpu=error,naga=warn,portfolio_scene=debug";
