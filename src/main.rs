use leptos::mount::mount_to_body;
use tidepool::App;
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;

fn main() {
    fmt()
        .with_writer(
            MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG),
        )
        // time is not available in the browser
        .without_time()
        .init();

    console_error_panic_hook::set_once();

    mount_to_body(App)
}
