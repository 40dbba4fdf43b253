//! Worker pool for synchronous CPU-bound work (password hashing), with two
//! priority levels and configurable worker threads.

use flume::{Receiver, Sender};
use futures::channel::oneshot;
use std::{sync::Arc, thread};

use crate::prelude::*;

type Job = Box<dyn FnOnce() + Send>;
type JobQueue = Arc<Receiver<Job>>;

#[derive(Debug)]
pub struct WorkerPool {
	high: Sender<Job>,
	low: Sender<Job>,
}

impl WorkerPool {
	/// `n_high` threads serve the high-priority queue only; `n_shared`
	/// threads drain both queues, high first.
	pub fn new(n_high: usize, n_shared: usize) -> Self {
		let (high, rx_high) = flume::unbounded();
		let (low, rx_low) = flume::unbounded();

		let rx_high = Arc::new(rx_high);
		let rx_low = Arc::new(rx_low);

		for _ in 0..n_high {
			let rx_high = Arc::clone(&rx_high);
			thread::spawn(move || worker_loop(&[rx_high]));
		}

		for _ in 0..n_shared {
			let rx_high = Arc::clone(&rx_high);
			let rx_low = Arc::clone(&rx_low);
			thread::spawn(move || worker_loop(&[rx_high, rx_low]));
		}

		Self { high, low }
	}

	/// Submit a closure to the high-priority queue → returns a Future for
	/// the result.
	pub fn run_immed<F, T>(&self, f: F) -> impl std::future::Future<Output = FtResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		self.submit(&self.high, f)
	}

	/// Submit a closure to the low-priority queue.
	pub fn run_slow<F, T>(&self, f: F) -> impl std::future::Future<Output = FtResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		self.submit(&self.low, f)
	}

	/// Like `run_immed`, but flattens `FtResult<FtResult<T>>` into
	/// `FtResult<T>`. Use when the closure itself returns `FtResult<T>`.
	pub fn try_run_immed<F, T>(&self, f: F) -> impl std::future::Future<Output = FtResult<T>>
	where
		F: FnOnce() -> FtResult<T> + Send + 'static,
		T: Send + 'static,
	{
		let fut = self.run_immed(f);
		async move { fut.await? }
	}

	fn submit<F, T>(
		&self,
		queue: &Sender<Job>,
		f: F,
	) -> impl std::future::Future<Output = FtResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		let (res_tx, res_rx) = oneshot::channel();

		let job = Box::new(move || {
			let result = f();
			let _ignore = res_tx.send(result);
		});

		if queue.send(job).is_err() {
			error!("Failed to send job to worker queue");
		}

		async move {
			res_rx.await.map_err(|_| {
				error!("Worker dropped result channel (task may have panicked)");
				Error::Internal("worker task failed".into())
			})
		}
	}
}

fn worker_loop(queues: &[JobQueue]) {
	loop {
		// Try higher-priority queues first (non-blocking)
		let mut job = None;
		for rx in queues {
			if let Ok(j) = rx.try_recv() {
				job = Some(j);
				break;
			}
		}

		if let Some(job) = job {
			if let Err(e) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)) {
				error!("Worker thread caught panic: {:?}", e);
			}
			continue;
		}

		// Wait for next job
		let mut selector = flume::Selector::new();
		for rx in queues {
			selector = selector.recv(rx, |res| res);
		}

		let job: Result<Job, flume::RecvError> = selector.wait();
		if let Ok(job) = job {
			if let Err(e) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)) {
				error!("Worker thread caught panic: {:?}", e);
			}
		}
	}
}

// vim: ts=4
