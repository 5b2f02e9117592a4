use keyquad_engine::KeyboardApp;
use keyquad_engine::board::KeyId;
use keyquad_engine::logging::{LoggingConfig, init_logging};
use keyquad_engine::window::RuntimeConfig;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut app = KeyboardApp::new();

    // Audio is out of scope here; each key just reports its note.
    for key in KeyId::ALL {
        let note = app.board().spec(key).note;
        app = app.on_key(key, move || log::info!("playing {note}"));
    }

    let config = RuntimeConfig::default().with_title("keyquad piano");
    app.run(config)
}
