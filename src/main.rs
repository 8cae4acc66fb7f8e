use job_board::{
    config::{get_config, init_config},
    dto::job_dto::JobListQuery,
    models::notification::{Notification, NotificationKind},
    AppState,
};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let mut state = AppState::new(config.clone())?;
    state.board.subscribe(|n: &Notification| match n.kind {
        NotificationKind::Error => tracing::warn!(title = %n.title, "{}", n.message),
        _ => info!(title = %n.title, "{}", n.message),
    });

    info!(
        seed_demo = config.seed_demo,
        jobs = state.board.store().len(),
        "Job board ready"
    );

    let snapshot = json!({
        "dashboard": state.board.dashboard(),
        "facets": state.board.facets(),
        "jobs": state.board.cards(&JobListQuery::default()),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
