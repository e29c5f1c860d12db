use hubrelay::config::Config;
use hubrelay::core::RelayResult;
use hubrelay::di::ServiceContainer;
use hubrelay::server;

/// Run the relay service, with command-line flags taking precedence over
/// the config file and environment
pub async fn run(mut config: Config, port: Option<u16>, bind: Option<String>) -> RelayResult<()> {
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(bind) = bind {
        config.bind_address = bind;
    }

    let container = ServiceContainer::new(config)?;
    server::serve(container).await
}
