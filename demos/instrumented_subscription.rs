use rs2_observable::*;

fn main() {
    let config = ObservableConfig::new()
        .name("squares")
        .log_notifications(true);

    let mut recorder = Recorder::new();
    match of(1..=10u64)
        .map(|x| x * x)
        .subscribe_instrumented(&mut recorder, &config)
    {
        Ok(metrics) => {
            println!("Values: {:?}", recorder.values());
            println!(
                "Processed {} values in {:?} (completed: {})",
                metrics.next_count, metrics.processing_time, metrics.completed
            );
        }
        Err(e) => eprintln!("Subscription rejected: {}", e),
    }

    match recorder.to_json() {
        Ok(json) => println!("Recorded: {}", json),
        Err(e) => eprintln!("Export failed: {}", e),
    }
}
