use std::sync::Arc;
use std::sync::mpsc::{
    self,
    Receiver,
    SyncSender
};
use std::thread;

use log::{
    info,
    warn
};
use rand::rngs::SmallRng;
use rand::{
    Rng,
    SeedableRng
};
use thiserror::Error;

use crate::configuration::Configuration;
use crate::function::basic::logarithm::Log;
use crate::task::task::{
    Task,
    TaskReport
};

#[derive(Debug, Error)]
pub enum HandOffError {
    #[error("the {0} thread panicked")]
    ThreadPanicked(&'static str)
}

// ─────────────────────────────────────────────────────────────────────────────
// Single-slot hand-off
// ─────────────────────────────────────────────────────────────────────────────
//
// One generator and one integrator share a channel of capacity 1: the
// generator blocks until the previous task has been taken, the integrator
// blocks until a task is there. Tasks are moved through the channel, so the
// two threads never touch the same function at once. Only one producer and
// one consumer are supported.

fn draw(rng: &mut SmallRng, (lower, upper): (f64, f64)) -> f64 {
    lower + rng.random::<f64>() * (upper - lower)
}

fn generate(configuration: &Configuration, sender: SyncSender<Task>) {
    let mut rng = SmallRng::seed_from_u64(configuration.seed());
    for i in 0..configuration.task_count() {
        let base = draw(&mut rng, configuration.base_range());
        let left = draw(&mut rng, configuration.left_range());
        let right = draw(&mut rng, configuration.right_range());
        let step = draw(&mut rng, configuration.step_range());
        let log = match Log::new(base) {
            Ok(log) => log,
            Err(error) => {
                warn!("task {}: skipped, {}", i, error);
                continue;
            }
        };
        let task = Task::new(Arc::new(log), left, right, step);
        info!("task {}: {} [log base {:.2}]", i, task, base);
        if sender.send(task).is_err() {
            warn!("task {}: integrator hung up, stopping generation", i);
            return;
        }
    }
}

fn integrate_all(receiver: Receiver<Task>) -> Vec<TaskReport> {
    let mut reports = Vec::new();
    for task in receiver {
        let report = task.run();
        match &report.result {
            Ok(_) => info!("{}", report),
            Err(error) => warn!("integration of [{:.2}, {:.2}] failed: {}", task.left(), task.right(), error)
        }
        reports.push(report);
    }
    reports
}

/// Runs the generator and the integrator on their own threads and returns
/// the integrator's reports in hand-off order.
pub fn run_tasks(configuration: &Configuration) -> Result<Vec<TaskReport>, HandOffError> {
    let (sender, receiver) = mpsc::sync_channel::<Task>(1);
    let generator_configuration = configuration.clone();
    let generator = thread::spawn(move || generate(&generator_configuration, sender));
    let integrator = thread::spawn(move || integrate_all(receiver));

    generator.join().map_err(|_| HandOffError::ThreadPanicked("generator"))?;
    integrator.join().map_err(|_| HandOffError::ThreadPanicked("integrator"))
}
