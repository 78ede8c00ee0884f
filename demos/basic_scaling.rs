use adaptive_styles::{HostDisplay, ScalingConfig, StyleNode, StyleScaler};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    // Pretend we are on an iPhone 11-class display: twice the reference
    // design size, rendering on a 2x pixel grid.
    let display = HostDisplay::new(828.0, 1792.0, 2.0)?;
    let scaler = StyleScaler::new(display, ScalingConfig::legacy())?;

    info!(factors = ?scaler.factors(), "scaler ready");

    let styles: StyleNode = serde_json::from_value(serde_json::json!({
        "screen": {
            "width": 414.0,
            "paddingHorizontal": 16.0,
            "backgroundColor": "#101418",
        },
        "title": {
            "fontSize": 24.0,
            "lineHeight": 32.0,
            "fontWeight": "bold",
            "color": "#f5f5f5",
        },
        "avatar": {
            "square": 48.0,
            "borderRadius": 24.0,
        },
        "badge": {
            "useAverageFactor": true,
            "marginTop": 4.0,
            "marginLeft": 4.0,
        },
    }))?;

    let sheet = scaler.register("profile", styles);

    println!("rewritten sheet:\n{}", serde_json::to_string_pretty(&*sheet)?);
    println!("one-off width: {}", scaler.width_of(100.0));

    Ok(())
}
