//! Scripted Gestures Demo
//!
//! Replays a fixed sequence of wheel and touch input against a three-page
//! scroller and prints every frame handed to the renderer.
//!
//! Run with: RUST_LOG=folio_scroller=trace cargo run -p folio_scroller --example scripted_gestures

use std::time::Duration;

use folio_scroller::prelude::*;

/// Prints each mounted page with its phase and class name
struct ConsoleRenderer;

impl PageRenderer<&'static str> for ConsoleRenderer {
    fn render(&mut self, frame: &PageFrame<'_, &'static str>) {
        match frame {
            PageFrame::Empty => println!("  (nothing mounted)"),
            PageFrame::Single(page) => println!("  [{page}]"),
            PageFrame::Stack(slots) => {
                for slot in slots {
                    println!(
                        "  #{} {:<8} {:?} .{} ({}ms/{}ms)",
                        slot.index,
                        slot.page,
                        slot.phase,
                        slot.class_name,
                        slot.timing.enter,
                        slot.timing.exit
                    );
                }
            }
        }
    }
}

enum Step {
    Input(InputEvent),
    Wait(u64),
}

fn main() -> folio_scroller::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ScrollerConfig::from_toml_str(
        r#"
        start = 1
        orientation = "vertical"
        "#,
    )?;

    let mut scroller = Scroller::new(vec!["intro", "features", "pricing"], config)
        .on_index_changed(|index| println!("index changed -> {index}"));
    let mut renderer = ConsoleRenderer;

    scroller.mount();
    scroller.render_into(&mut renderer);

    let script = [
        Step::Input(InputEvent::wheel(0.0, 50.0)),
        Step::Input(InputEvent::wheel(0.0, -50.0)),
        Step::Wait(400),
        Step::Wait(400),
        Step::Input(InputEvent::touch_start(120.0, 400.0)),
        Step::Input(InputEvent::touch_move(120.0, 460.0)),
        Step::Wait(800),
        Step::Input(InputEvent::wheel(0.0, 12.0)),
        Step::Wait(0),
    ];

    for step in script {
        match step {
            Step::Input(event) => {
                let response = scroller.handle_input(&event);
                println!("{event:?} -> {response:?}");
            }
            Step::Wait(ms) => {
                scroller.advance(Duration::from_millis(ms));
                println!(
                    "t={}ms locked={}",
                    scroller.elapsed().as_millis(),
                    scroller.is_locked()
                );
            }
        }
        scroller.render_into(&mut renderer);
    }

    scroller.unmount();
    Ok(())
}
