use datatochart::app::DataToChartApp;
use datatochart::config::ViewerConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewerConfig::default();
    let options = config.native_options();

    eframe::run_native(
        "datatochart",
        options,
        Box::new(|_cc| Ok(Box::new(DataToChartApp::new(config)))),
    )
}
