use glam::Vec3;

/// Live-tunable shading coefficients read by the frame driver every tick.
///
/// Values are not validated: the parameter panel bounds its own controls, and
/// anything else (including out-of-range values) is passed through unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadingParams {
    pub amplitude: f32,
    pub frequency: f32,
    pub pulse_amplitude: f32,
    pub edge_softness: f32,
    pub decay: f32,
    pub speed: f32,
    pub strength: f32,
    pub ambient_intensity: f32,
    pub specular_intensity: f32,
    pub tiling: f32,
    pub light_position: Vec3,
    pub light_color: Vec3,
    pub ambient_color: Vec3,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            amplitude: 0.03,
            frequency: 40.0,
            pulse_amplitude: 0.4,
            edge_softness: 0.05,
            decay: 1.2,
            speed: 0.25,
            strength: 1.0,
            ambient_intensity: 1.0,
            specular_intensity: 0.6,
            tiling: 1.0,
            light_position: Vec3::new(0.5, 0.5, 1.0),
            light_color: Vec3::new(1.0, 1.0, 1.0),
            ambient_color: Vec3::new(0.2, 0.2, 0.2),
        }
    }
}

/// Every numeric control the panel exposes. Light position is edited per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Amplitude,
    Frequency,
    PulseAmplitude,
    EdgeSoftness,
    Decay,
    Speed,
    Strength,
    AmbientIntensity,
    SpecularIntensity,
    Tiling,
    LightPositionX,
    LightPositionY,
    LightPositionZ,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorKey {
    LightColor,
    AmbientColor,
}

/// Declared range of a slider control.
#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    pub key: ParamKey,
    pub id: &'static str,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct ColorSpec {
    pub key: ColorKey,
    pub id: &'static str,
    pub label: &'static str,
}

pub const PARAM_SPECS: &[ParamSpec] = &[
    ParamSpec { key: ParamKey::Amplitude, id: "amplitude", label: "Amplitude", min: 0.0, max: 0.2, step: 0.001 },
    ParamSpec { key: ParamKey::Frequency, id: "frequency", label: "Frequency", min: 1.0, max: 120.0, step: 0.5 },
    ParamSpec { key: ParamKey::PulseAmplitude, id: "pulse-amplitude", label: "Pulse amplitude", min: 0.0, max: 2.0, step: 0.01 },
    ParamSpec { key: ParamKey::EdgeSoftness, id: "edge-softness", label: "Edge softness", min: 0.001, max: 0.5, step: 0.001 },
    ParamSpec { key: ParamKey::Decay, id: "decay", label: "Decay", min: 0.0, max: 5.0, step: 0.01 },
    ParamSpec { key: ParamKey::Speed, id: "speed", label: "Speed", min: 0.01, max: 1.0, step: 0.01 },
    ParamSpec { key: ParamKey::Strength, id: "strength", label: "Strength", min: 0.0, max: 5.0, step: 0.01 },
    ParamSpec { key: ParamKey::AmbientIntensity, id: "ambient-intensity", label: "Ambient intensity", min: 0.0, max: 2.0, step: 0.01 },
    ParamSpec { key: ParamKey::SpecularIntensity, id: "specular-intensity", label: "Specular intensity", min: 0.0, max: 2.0, step: 0.01 },
    ParamSpec { key: ParamKey::Tiling, id: "tiling", label: "Tiling", min: 0.1, max: 8.0, step: 0.1 },
    ParamSpec { key: ParamKey::LightPositionX, id: "light-x", label: "Light X", min: -2.0, max: 2.0, step: 0.01 },
    ParamSpec { key: ParamKey::LightPositionY, id: "light-y", label: "Light Y", min: -2.0, max: 2.0, step: 0.01 },
    ParamSpec { key: ParamKey::LightPositionZ, id: "light-z", label: "Light Z", min: 0.0, max: 4.0, step: 0.01 },
];

pub const COLOR_SPECS: &[ColorSpec] = &[
    ColorSpec { key: ColorKey::LightColor, id: "light-color", label: "Light color" },
    ColorSpec { key: ColorKey::AmbientColor, id: "ambient-color", label: "Ambient color" },
];

impl ShadingParams {
    pub fn get(&self, key: ParamKey) -> f32 {
        match key {
            ParamKey::Amplitude => self.amplitude,
            ParamKey::Frequency => self.frequency,
            ParamKey::PulseAmplitude => self.pulse_amplitude,
            ParamKey::EdgeSoftness => self.edge_softness,
            ParamKey::Decay => self.decay,
            ParamKey::Speed => self.speed,
            ParamKey::Strength => self.strength,
            ParamKey::AmbientIntensity => self.ambient_intensity,
            ParamKey::SpecularIntensity => self.specular_intensity,
            ParamKey::Tiling => self.tiling,
            ParamKey::LightPositionX => self.light_position.x,
            ParamKey::LightPositionY => self.light_position.y,
            ParamKey::LightPositionZ => self.light_position.z,
        }
    }

    pub fn set(&mut self, key: ParamKey, value: f32) {
        let slot = match key {
            ParamKey::Amplitude => &mut self.amplitude,
            ParamKey::Frequency => &mut self.frequency,
            ParamKey::PulseAmplitude => &mut self.pulse_amplitude,
            ParamKey::EdgeSoftness => &mut self.edge_softness,
            ParamKey::Decay => &mut self.decay,
            ParamKey::Speed => &mut self.speed,
            ParamKey::Strength => &mut self.strength,
            ParamKey::AmbientIntensity => &mut self.ambient_intensity,
            ParamKey::SpecularIntensity => &mut self.specular_intensity,
            ParamKey::Tiling => &mut self.tiling,
            ParamKey::LightPositionX => &mut self.light_position.x,
            ParamKey::LightPositionY => &mut self.light_position.y,
            ParamKey::LightPositionZ => &mut self.light_position.z,
        };
        *slot = value;
    }

    pub fn color(&self, key: ColorKey) -> Vec3 {
        match key {
            ColorKey::LightColor => self.light_color,
            ColorKey::AmbientColor => self.ambient_color,
        }
    }

    pub fn set_color(&mut self, key: ColorKey, rgb: Vec3) {
        match key {
            ColorKey::LightColor => self.light_color = rgb,
            ColorKey::AmbientColor => self.ambient_color = rgb,
        }
    }
}

/// Parse a `#rrggbb` string (as produced by `<input type="color">`) into
/// linear 0..1 components.
pub fn parse_hex_color(s: &str) -> Option<Vec3> {
    let hex = s.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    Some(Vec3::new(r as f32, g as f32, b as f32) / 255.0)
}

pub fn format_hex_color(rgb: Vec3) -> String {
    let c = (rgb.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    format!("#{:02x}{:02x}{:02x}", c.x as u8, c.y as u8, c.z as u8)
}
