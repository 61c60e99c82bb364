//! Ambient sound mixer: per-channel volume, master volume and named presets.

use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundKind {
    Rain,
    Forest,
    Waves,
    Fire,
    Cafe,
    Wind,
    WhiteNoise,
}

impl SoundKind {
    pub const ALL: [SoundKind; 7] = [
        SoundKind::Rain,
        SoundKind::Forest,
        SoundKind::Waves,
        SoundKind::Fire,
        SoundKind::Cafe,
        SoundKind::Wind,
        SoundKind::WhiteNoise,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SoundKind::Rain => "Rain",
            SoundKind::Forest => "Forest",
            SoundKind::Waves => "Waves",
            SoundKind::Fire => "Fireplace",
            SoundKind::Cafe => "Café",
            SoundKind::Wind => "Wind",
            SoundKind::WhiteNoise => "White noise",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SoundKind::Rain => "🌧️",
            SoundKind::Forest => "🌲",
            SoundKind::Waves => "🌊",
            SoundKind::Fire => "🔥",
            SoundKind::Cafe => "☕",
            SoundKind::Wind => "🍃",
            SoundKind::WhiteNoise => "📻",
        }
    }

    /// Looping audio asset served alongside the UI bundle
    pub fn asset_path(self) -> &'static str {
        match self {
            SoundKind::Rain => "/sounds/rain.ogg",
            SoundKind::Forest => "/sounds/forest.ogg",
            SoundKind::Waves => "/sounds/waves.ogg",
            SoundKind::Fire => "/sounds/fire.ogg",
            SoundKind::Cafe => "/sounds/cafe.ogg",
            SoundKind::Wind => "/sounds/wind.ogg",
            SoundKind::WhiteNoise => "/sounds/white-noise.ogg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub kind: SoundKind,
    pub volume: u8,
    pub playing: bool,
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    /// (sound, volume) for every channel that was playing
    pub levels: Vec<(SoundKind, u8)>,
    pub master: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixerState {
    pub channels: Vec<Channel>,
    pub master: u8,
    #[serde(default)]
    pub presets: Vec<Preset>,
}

impl Default for MixerState {
    fn default() -> Self {
        Self {
            channels: SoundKind::ALL
                .iter()
                .map(|&kind| Channel {
                    kind,
                    volume: 50,
                    playing: false,
                    muted: false,
                })
                .collect(),
            master: 80,
            presets: Vec::new(),
        }
    }
}

impl MixerState {
    pub fn channel(&self, kind: SoundKind) -> Option<&Channel> {
        self.channels.iter().find(|c| c.kind == kind)
    }

    fn channel_mut(&mut self, kind: SoundKind) -> &mut Channel {
        if let Some(idx) = self.channels.iter().position(|c| c.kind == kind) {
            return &mut self.channels[idx];
        }
        // Older saved state may predate a sound; add it on first touch.
        self.channels.push(Channel {
            kind,
            volume: 50,
            playing: false,
            muted: false,
        });
        let last = self.channels.len() - 1;
        &mut self.channels[last]
    }

    pub fn set_volume(&mut self, kind: SoundKind, volume: u8) {
        self.channel_mut(kind).volume = volume.min(MAX_VOLUME);
    }

    pub fn set_master(&mut self, volume: u8) {
        self.master = volume.min(MAX_VOLUME);
    }

    pub fn toggle_playing(&mut self, kind: SoundKind) -> bool {
        let channel = self.channel_mut(kind);
        channel.playing = !channel.playing;
        channel.playing
    }

    pub fn toggle_muted(&mut self, kind: SoundKind) -> bool {
        let channel = self.channel_mut(kind);
        channel.muted = !channel.muted;
        channel.muted
    }

    pub fn stop_all(&mut self) {
        for channel in &mut self.channels {
            channel.playing = false;
        }
    }

    pub fn any_playing(&self) -> bool {
        self.channels.iter().any(|c| c.playing)
    }

    /// Gain in 0.0..=1.0 to hand to the audio element.
    pub fn effective_volume(&self, kind: SoundKind) -> f64 {
        match self.channel(kind) {
            Some(c) if c.playing && !c.muted => {
                f64::from(c.volume) * f64::from(self.master) / 10_000.0
            }
            _ => 0.0,
        }
    }

    pub fn save_preset(&mut self, name: &str) -> DeskResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeskError::invalid("Preset name cannot be empty"));
        }
        let preset = Preset {
            name: name.to_string(),
            levels: self
                .channels
                .iter()
                .filter(|c| c.playing)
                .map(|c| (c.kind, c.volume))
                .collect(),
            master: self.master,
        };
        match self.presets.iter_mut().find(|p| p.name == name) {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
        Ok(())
    }

    pub fn apply_preset(&mut self, name: &str) -> DeskResult<()> {
        let preset = self
            .presets
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| DeskError::invalid(format!("Unknown preset: {name}")))?;
        self.stop_all();
        for (kind, volume) in preset.levels {
            let channel = self.channel_mut(kind);
            channel.volume = volume.min(MAX_VOLUME);
            channel.playing = true;
            channel.muted = false;
        }
        self.master = preset.master.min(MAX_VOLUME);
        Ok(())
    }

    pub fn delete_preset(&mut self, name: &str) -> bool {
        let before = self.presets.len();
        self.presets.retain(|p| p.name != name);
        self.presets.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_every_sound_stopped() {
        let mixer = MixerState::default();
        assert_eq!(mixer.channels.len(), SoundKind::ALL.len());
        assert!(!mixer.any_playing());
        assert_eq!(mixer.effective_volume(SoundKind::Rain), 0.0);
    }

    #[test]
    fn effective_volume_scales_by_master() {
        let mut mixer = MixerState::default();
        mixer.set_volume(SoundKind::Rain, 50);
        mixer.set_master(50);
        mixer.toggle_playing(SoundKind::Rain);
        assert!((mixer.effective_volume(SoundKind::Rain) - 0.25).abs() < 1e-9);

        mixer.toggle_muted(SoundKind::Rain);
        assert_eq!(mixer.effective_volume(SoundKind::Rain), 0.0);
    }

    #[test]
    fn volumes_are_clamped() {
        let mut mixer = MixerState::default();
        mixer.set_volume(SoundKind::Fire, 250);
        mixer.set_master(255);
        assert_eq!(mixer.channel(SoundKind::Fire).unwrap().volume, 100);
        assert_eq!(mixer.master, 100);
    }

    #[test]
    fn presets_capture_playing_channels() {
        let mut mixer = MixerState::default();
        mixer.set_volume(SoundKind::Rain, 70);
        mixer.toggle_playing(SoundKind::Rain);
        mixer.toggle_playing(SoundKind::Cafe);
        mixer.save_preset("  Study  ").unwrap();

        mixer.stop_all();
        mixer.set_volume(SoundKind::Rain, 10);
        mixer.toggle_playing(SoundKind::Wind);

        mixer.apply_preset("Study").unwrap();
        assert!(mixer.channel(SoundKind::Rain).unwrap().playing);
        assert_eq!(mixer.channel(SoundKind::Rain).unwrap().volume, 70);
        assert!(mixer.channel(SoundKind::Cafe).unwrap().playing);
        assert!(!mixer.channel(SoundKind::Wind).unwrap().playing);
    }

    #[test]
    fn saving_same_preset_name_overwrites() {
        let mut mixer = MixerState::default();
        mixer.save_preset("Night").unwrap();
        mixer.set_master(20);
        mixer.save_preset("Night").unwrap();
        assert_eq!(mixer.presets.len(), 1);
        assert_eq!(mixer.presets[0].master, 20);
        assert!(mixer.delete_preset("Night"));
        assert!(!mixer.delete_preset("Night"));
    }

    #[test]
    fn blank_or_unknown_presets_are_rejected() {
        let mut mixer = MixerState::default();
        assert!(mixer.save_preset("   ").is_err());
        assert!(mixer.apply_preset("missing").is_err());
    }

    #[test]
    fn state_missing_a_channel_recovers_it() {
        let mut mixer = MixerState::default();
        mixer.channels.retain(|c| c.kind != SoundKind::WhiteNoise);
        mixer.toggle_playing(SoundKind::WhiteNoise);
        assert!(mixer.channel(SoundKind::WhiteNoise).unwrap().playing);
    }
}
