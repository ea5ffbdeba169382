use job_monitor_lib::{config, logger};
use job_monitor_lib::{HttpFetcher, KeywordCatalog, KeywordFilter, MailSettings, Monitor, Notifier};

use std::error::Error;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    logger::init()?;
    info!("Starting structural-biology job monitor...");

    let fetcher = HttpFetcher::new()?;
    let filter = KeywordFilter::new(KeywordCatalog::default());
    let monitor = Monitor::new(fetcher, filter, config::default_regions());

    let records = monitor.run();

    // Fetch problems were absorbed above; a delivery failure ends the run here.
    let notifier = Notifier::smtp(&MailSettings::from_env());
    notifier.notify(&records)?;

    Ok(())
}
