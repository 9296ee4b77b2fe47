/// Ripple lifecycle and page wiring constants.
///
/// These keep capacities, default lifetimes and DOM/asset names in one place so
/// the store, the renderer's uniform layout and the page stay in agreement.
// Maximum simultaneous ripples; must match the array length in ripple.frag.wgsl
pub const MAX_RIPPLES: usize = 50;

// Reals per ripple slot in the flat buffer: x, y, start time, duration
pub const RIPPLE_STRIDE: usize = 4;

// Seconds a ripple stays active after the click that spawned it
pub const DEFAULT_RIPPLE_DURATION_SEC: f32 = 6.0;

// Startup assets, fetched relative to the page
pub const VERTEX_SHADER_URL: &str = "shaders/ripple.vert.wgsl";
pub const FRAGMENT_SHADER_URL: &str = "shaders/ripple.frag.wgsl";
pub const SURFACE_TEXTURE_URL: &str = "assets/water.jpg";

// DOM element ids
pub const CANVAS_ID: &str = "ripple-canvas";
pub const PARAM_PANEL_ID: &str = "param-panel";
pub const STATUS_OVERLAY_ID: &str = "status-overlay";

// Bind group slots used by both shader modules
pub const UNIFORM_BINDING: u32 = 0;
pub const TEXTURE_BINDING: u32 = 1;
pub const SAMPLER_BINDING: u32 = 2;

// Full-surface quad: two triangles spanning normalized device coordinates
pub const QUAD_VERTICES: [[f32; 2]; 6] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [-1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [1.0, 1.0],
];

// Background cleared before the full-surface draw
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
