use glam::Vec3;

/// The five fixed stages of the experience, in no particular order here;
/// traversal order is defined by [`SCENE_ORDER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SceneId {
    #[default]
    Intro,
    Vision,
    Capabilities,
    Approach,
    Contact,
}

/// Immutable per-scene record: display metadata plus the camera endpoint the
/// animator flies to when the scene becomes active.
#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    pub id: SceneId,
    pub title: &'static str,
    pub hud_text: &'static str,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub background: [f32; 3],
}

/// Traversal order. Index 0 is the entry scene, the last index the terminal
/// scene; every id appears exactly once.
pub const SCENE_ORDER: [SceneId; 5] = [
    SceneId::Intro,
    SceneId::Vision,
    SceneId::Capabilities,
    SceneId::Approach,
    SceneId::Contact,
];

pub const SCENES: [SceneConfig; 5] = [
    SceneConfig {
        id: SceneId::Intro,
        title: "Entry Portal",
        hud_text: "Initializing experience\u{2026}",
        camera_position: Vec3::new(0.0, 0.0, 10.0),
        camera_target: Vec3::new(0.0, 0.0, 0.0),
        background: [0.039, 0.055, 0.102],
    },
    SceneConfig {
        id: SceneId::Vision,
        title: "Vision",
        hud_text: "Defining direction\u{2026}",
        camera_position: Vec3::new(5.0, 3.0, 8.0),
        camera_target: Vec3::new(0.0, 0.0, 0.0),
        background: [0.051, 0.063, 0.125],
    },
    SceneConfig {
        id: SceneId::Capabilities,
        title: "Capabilities",
        hud_text: "Mapping systems\u{2026}",
        camera_position: Vec3::new(0.0, 4.0, 12.0),
        camera_target: Vec3::new(0.0, 0.0, 0.0),
        background: [0.059, 0.071, 0.157],
    },
    SceneConfig {
        id: SceneId::Approach,
        title: "Approach",
        hud_text: "Revealing architecture\u{2026}",
        camera_position: Vec3::new(-3.0, 2.0, 10.0),
        camera_target: Vec3::new(0.0, 0.0, 0.0),
        background: [0.039, 0.055, 0.102],
    },
    SceneConfig {
        id: SceneId::Contact,
        title: "Contact",
        hud_text: "Destination reached.",
        camera_position: Vec3::new(0.0, 1.0, 6.0),
        camera_target: Vec3::new(0.0, 0.0, 0.0),
        background: [0.031, 0.043, 0.082],
    },
];

impl SceneId {
    /// Position of this scene within [`SCENE_ORDER`].
    pub fn index(self) -> usize {
        SCENE_ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Scene at `index`, clamped to the terminal scene for out-of-range input.
    pub fn from_index(index: usize) -> SceneId {
        SCENE_ORDER[index.min(SCENE_ORDER.len() - 1)]
    }

    /// Parse a scene name. Unknown names fall closed to the entry scene so
    /// the renderer always has something to mount.
    pub fn from_name(name: &str) -> SceneId {
        match name {
            "intro" => SceneId::Intro,
            "vision" => SceneId::Vision,
            "capabilities" => SceneId::Capabilities,
            "approach" => SceneId::Approach,
            "contact" => SceneId::Contact,
            _ => SceneId::default(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SceneId::Intro => "intro",
            SceneId::Vision => "vision",
            SceneId::Capabilities => "capabilities",
            SceneId::Approach => "approach",
            SceneId::Contact => "contact",
        }
    }

    pub fn config(self) -> &'static SceneConfig {
        &SCENES[self.index()]
    }

    /// Next scene in traversal order, or `None` at the terminal scene.
    pub fn next(self) -> Option<SceneId> {
        let i = self.index();
        if i + 1 < SCENE_ORDER.len() {
            Some(SCENE_ORDER[i + 1])
        } else {
            None
        }
    }

    /// Previous scene in traversal order, or `None` at the entry scene.
    pub fn prev(self) -> Option<SceneId> {
        let i = self.index();
        if i > 0 {
            Some(SCENE_ORDER[i - 1])
        } else {
            None
        }
    }
}
