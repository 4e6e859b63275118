use crate::core::SceneId;
use glam::Vec3;

// Visual compositions. Each scene contributes a fixed set of glow sprites;
// `time` (seconds since start) drives the slow drift and pulsing so the
// backgrounds never sit perfectly still.

pub const CYAN: [f32; 3] = [0.0, 0.851, 1.0];
pub const VIOLET: [f32; 3] = [0.655, 0.545, 0.98];

#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub position: Vec3,
    pub scale: f32,
    pub color: [f32; 3],
    pub pulse: f32,
}

/// Gentle vertical drift around a rest position.
#[inline]
fn drift(base: Vec3, time: f32, speed: f32, phase: f32) -> Vec3 {
    base + Vec3::new(0.0, (time * speed + phase).sin() * 0.3, 0.0)
}

/// Slow pulsing in [0.6, 1.0] for platform and marker glow.
#[inline]
fn slow_pulse(time: f32) -> f32 {
    (time * 0.5).sin() * 0.2 + 0.8
}

fn floating_body(
    out: &mut Vec<Sprite>,
    position: Vec3,
    size: f32,
    color: [f32; 3],
    emissive: f32,
    time: f32,
    phase: f32,
) {
    out.push(Sprite {
        position: drift(position, time, 0.4, phase),
        scale: size,
        color,
        pulse: emissive,
    });
}

/// A flat plate of dim dots, used for grids and the terminal platform.
fn dot_plane(
    out: &mut Vec<Sprite>,
    center: Vec3,
    extent: f32,
    per_side: usize,
    color: [f32; 3],
    brightness: f32,
) {
    let n = per_side.max(2);
    for ix in 0..n {
        for iz in 0..n {
            let fx = ix as f32 / (n - 1) as f32 - 0.5;
            let fz = iz as f32 / (n - 1) as f32 - 0.5;
            out.push(Sprite {
                position: center + Vec3::new(fx * extent, 0.0, fz * extent),
                scale: 0.12,
                color,
                pulse: brightness,
            });
        }
    }
}

fn intro(time: f32) -> Vec<Sprite> {
    let mut out = Vec::new();
    dot_plane(
        &mut out,
        Vec3::new(0.0, -3.0, -4.0),
        16.0,
        7,
        CYAN,
        0.15 * slow_pulse(time),
    );
    floating_body(&mut out, Vec3::new(0.0, 0.0, -5.0), 2.0, CYAN, 0.6, time, 0.0);
    floating_body(&mut out, Vec3::new(-3.0, 2.0, -8.0), 0.8, VIOLET, 0.4, time, 1.3);
    floating_body(&mut out, Vec3::new(4.0, -1.0, -6.0), 1.2, CYAN, 0.3, time, 2.6);
    out
}

fn vision(time: f32) -> Vec<Sprite> {
    let mut out = Vec::new();
    // Violet core with cyan satellites orbiting its rest positions.
    floating_body(&mut out, Vec3::ZERO, 0.8, VIOLET, 0.8 * slow_pulse(time), time, 0.0);
    let satellites = [
        Vec3::new(3.0, 1.0, -2.0),
        Vec3::new(-3.0, -1.0, -2.0),
        Vec3::new(0.0, 3.0, -3.0),
        Vec3::new(2.0, -2.0, -4.0),
    ];
    for (i, p) in satellites.iter().enumerate() {
        floating_body(&mut out, *p, 0.4, CYAN, 0.5, time, i as f32 * 1.7);
    }
    out
}

fn capabilities(time: f32) -> Vec<Sprite> {
    let mut out = Vec::new();
    // Three node clusters, one per capability group.
    let clusters: [(Vec3, [f32; 3]); 3] = [
        (Vec3::new(4.0, 2.0, -4.0), VIOLET),
        (Vec3::new(-4.0, 1.0, -5.0), CYAN),
        (Vec3::new(0.0, 4.0, -6.0), CYAN),
    ];
    for (i, (center, color)) in clusters.iter().enumerate() {
        let phase = i as f32 * 2.1;
        floating_body(&mut out, *center, 0.9, *color, 0.5, time, phase);
        floating_body(
            &mut out,
            *center + Vec3::new(0.5, 1.0, 0.5),
            0.4,
            *color,
            0.4,
            time,
            phase + 0.9,
        );
        floating_body(
            &mut out,
            *center + Vec3::new(-0.8, 0.8, -0.5),
            0.5,
            *color,
            0.3,
            time,
            phase + 1.8,
        );
    }
    out
}

fn approach(time: f32) -> Vec<Sprite> {
    let mut out = Vec::new();
    // Receding stack of grid layers, the architecture reveal.
    for i in 0..4 {
        let depth = i as f32;
        dot_plane(
            &mut out,
            Vec3::new(0.0, depth * 0.5 - 1.0, -5.0 - depth),
            10.0,
            5,
            CYAN,
            (0.3 - depth * 0.05) * slow_pulse(time + depth),
        );
    }
    out
}

fn contact(time: f32) -> Vec<Sprite> {
    let mut out = Vec::new();
    // Illuminated terminal platform with a pulsing glow.
    let glow = slow_pulse(time);
    dot_plane(&mut out, Vec3::new(0.0, -1.0, 0.0), 6.0, 6, CYAN, 0.3 * glow);
    // Edge markers, brighter than the plate.
    for (sx, sz) in [(-1.0f32, -1.0f32), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
        out.push(Sprite {
            position: Vec3::new(sx * 3.0, -0.9, sz * 3.0),
            scale: 0.3,
            color: CYAN,
            pulse: 0.8 * glow,
        });
    }
    out
}

/// Deterministic dispatch from the active scene to its composition. The scene
/// set is a closed enum, so the match stays exhaustive by construction.
pub fn compose(scene: SceneId, time: f32) -> Vec<Sprite> {
    match scene {
        SceneId::Intro => intro(time),
        SceneId::Vision => vision(time),
        SceneId::Capabilities => capabilities(time),
        SceneId::Approach => approach(time),
        SceneId::Contact => contact(time),
    }
}
