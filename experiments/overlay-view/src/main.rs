mod draw;
mod synth;

use courtside_base::init_stdout_logger;
use courtside_overlay::{
    overlay_channel, segments, CameraFacing, DisplayMetrics, Pose, PoseIngestor, ViewState,
};
use draw::{clear, draw_line, draw_marker, SKELETON_COLOR};
use minifb::{Key, Window, WindowOptions};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use synth::{SynthFrame, SynthPoseDetector};

const WIDTH: usize = 390;
const HEIGHT: usize = 844;
const FRAME_INTERVAL: Duration = Duration::from_millis(33); // ~30 fps producer

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    log::info!("overlay-view: synthetic pose through the frame coordinate pipeline");
    log::info!("controls: SPACE toggles the ingestion gate, F flips camera facing, ESC exits");

    let (sender, mut state) = overlay_channel(Pose::default());

    // UI-owned view state the producer re-reads every frame.
    let view = Arc::new(Mutex::new(ViewState::new(
        DisplayMetrics::new(WIDTH as f32, HEIGHT as f32),
        CameraFacing::Back,
    )));

    // Frame-producer thread: one ingest per synthetic frame, never
    // touching the window. It stops on its own once the UI drops the
    // render state.
    let producer_view = Arc::clone(&view);
    let producer = thread::spawn(move || {
        let mut ingestor = PoseIngestor::new(SynthPoseDetector::new(), sender);
        while ingestor.is_live() {
            let snapshot = *producer_view.lock().unwrap_or_else(|e| e.into_inner());
            ingestor.ingest(&SynthFrame, &snapshot);
            thread::sleep(FRAME_INTERVAL);
        }
        log::info!("producer: render state gone, stopping");
    });

    let mut window = Window::new(
        "overlay-view - ESC to exit",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )?;
    window.set_target_fps(60);

    let mut buf = vec![0u32; WIDTH * HEIGHT];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        // Layout pass: push the current surface size and input state to
        // the producer.
        {
            let (w, h) = window.get_size();
            let mut v = view.lock().unwrap_or_else(|e| e.into_inner());
            v.display = DisplayMetrics::new(w as f32, h as f32);
            if window.is_key_pressed(Key::Space, minifb::KeyRepeat::No) {
                v.active = !v.active;
                log::info!("ingestion gate {}", if v.active { "open" } else { "closed" });
            }
            if window.is_key_pressed(Key::F, minifb::KeyRepeat::No) {
                v.facing = match v.facing {
                    CameraFacing::Back => CameraFacing::Front,
                    CameraFacing::Front => CameraFacing::Back,
                };
                log::info!("camera facing now {:?}", v.facing);
            }
        }

        // Repaint from the latest render state; dropped intermediate
        // frames are expected and correct.
        let pose = state.latest();

        clear(&mut buf);
        for seg in segments(&pose) {
            draw_line(&mut buf, WIDTH, HEIGHT, &seg, SKELETON_COLOR);
        }
        for point in pose.keypoints {
            if !point.is_zero() {
                draw_marker(&mut buf, WIDTH, HEIGHT, point.x, point.y, 0x00FFFFFF);
            }
        }

        window.update_with_buffer(&buf, WIDTH, HEIGHT)?;
    }

    // Teardown: dropping the render state makes late producer publishes
    // no-ops and ends its loop.
    drop(state);
    producer.join().ok();

    log::info!("exiting");
    Ok(())
}
