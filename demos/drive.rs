extern crate env_logger;
extern crate robotruck;

use robotruck::{Config, Part, Rig, Simulation};

const FRAME: f32 = 1.0 / 60.0;

/// Scripted key presses: (frame, control, pressed).
const SCRIPT: &[(u32, &str, bool)] = &[
    (10, "KeyR", true),
    (10, "KeyW", true),
    (10, "KeyQ", true),
    (10, "KeyE", true),
    (80, "KeyR", false),
    (80, "KeyW", false),
    (80, "KeyQ", false),
    (80, "KeyE", false),
    (90, "Digit4", true),
    (91, "Digit4", false),
    (100, "ArrowLeft", true),
    (400, "ArrowLeft", false),
    (560, "KeyA", true),
    (565, "KeyA", false),
    (570, "ArrowDown", true),
    (600, "ArrowDown", false),
];

fn main() {
    env_logger::init().unwrap();

    let mut sim = Simulation::new(Config::default());
    let mut rig = Rig::new();

    for frame in 0 .. 640 {
        for &(at, code, pressed) in SCRIPT {
            if at == frame {
                if pressed {
                    sim.press_key(code);
                } else {
                    sim.release_key(code);
                }
            }
        }

        sim.tick(FRAME);
        rig.update(&sim);

        if frame % 40 == 0 {
            let head = rig.world_transform(Part::Head);
            let trailer = rig.world_transform(Part::Trailer);
            println!(
                "frame {:3}: {:?} mode, camera {}, head at {:?}, trailer at {:?} ({:?})",
                frame,
                sim.mode(),
                sim.view().camera(),
                head.position,
                trailer.position,
                sim.engagement(),
            );
        }
    }
}
