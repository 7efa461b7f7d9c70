use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractivePresenterPort;
use crate::core::actions::render_image::render_image;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractivePresenterPort>,
}

/// Runs renders on a dedicated worker thread, one at a time.
///
/// Requests are coalesced latest-wins: submitting a new request replaces
/// any queued one, and a render that was superseded while it ran is
/// discarded instead of presented. A render in flight is never
/// interrupted; it runs to completion and its staleness is checked only
/// at the end. This keeps at most one render in flight per controller
/// with no locking on the pixel buffer itself.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    #[must_use]
    pub fn new(presenter_port: Arc<dyn InteractivePresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues a request, superseding any not-yet-started one. Returns the
    /// generation assigned to this request.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    /// Generation of the newest request that finished and was presented.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let start = Instant::now();
            let result = render_image(request.view, request.resolution, request.params);
            let render_duration = start.elapsed();

            // a newer submission supersedes this job; drop the stale result
            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            match result {
                Ok(pixel_buffer) => {
                    shared.presenter_port.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration,
                    }));
                }
                Err(err) => {
                    shared
                        .presenter_port
                        .present(RenderEvent::Error(RenderError {
                            generation: job_generation,
                            message: err.to_string(),
                        }));
                }
            }

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::fractal_params::FractalParams;
    use crate::core::data::resolution::Resolution;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl InteractivePresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn create_test_request() -> RenderRequest {
        let view = ComplexRect::new(
            Complex {
                real: -2.0,
                imag: 2.0,
            },
            Complex {
                real: 2.0,
                imag: -2.0,
            },
        )
        .expect("test view is valid");

        RenderRequest {
            view,
            resolution: Resolution::new(16, 16).expect("test resolution is valid"),
            params: FractalParams::new(2.0, 10, 2.0).expect("test params are valid"),
        }
    }

    fn wait_for_completed_generation(
        controller: &InteractiveController,
        generation: u64,
        timeout: Duration,
    ) {
        let start = Instant::now();
        while controller.last_completed_generation() < generation {
            assert!(
                start.elapsed() < timeout,
                "generation {} not completed within {:?}",
                generation,
                timeout
            );
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_single_request_presents_a_frame() {
        let presenter = Arc::new(MockPresenterPort::default());
        let controller = InteractiveController::new(presenter.clone());

        let generation = controller.submit_request(create_test_request());
        wait_for_completed_generation(&controller, generation, Duration::from_secs(5));

        let events = presenter.take_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            RenderEvent::Frame(frame) => {
                assert_eq!(frame.generation, generation);
                assert_eq!(frame.pixel_buffer.buffer_size(), 16 * 16 * 3);
            }
            RenderEvent::Error(err) => panic!("unexpected render error: {}", err.message),
        }
    }

    #[test]
    fn test_generations_increase_per_request() {
        let presenter = Arc::new(MockPresenterPort::default());
        let controller = InteractiveController::new(presenter);

        let first = controller.submit_request(create_test_request());
        let second = controller.submit_request(create_test_request());

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_burst_of_requests_presents_the_latest_generation() {
        let presenter = Arc::new(MockPresenterPort::default());
        let controller = InteractiveController::new(presenter.clone());

        let mut last_generation = 0;
        for _ in 0..5 {
            last_generation = controller.submit_request(create_test_request());
        }

        wait_for_completed_generation(&controller, last_generation, Duration::from_secs(5));

        let events = presenter.take_events();
        assert!(!events.is_empty());

        let mut presented = Vec::new();
        for event in &events {
            match event {
                RenderEvent::Frame(frame) => presented.push(frame.generation),
                RenderEvent::Error(err) => panic!("unexpected render error: {}", err.message),
            }
        }

        // stale intermediate requests may be skipped entirely, but whatever
        // is presented arrives in order and ends with the newest request
        assert!(presented.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*presented.last().unwrap(), last_generation);
    }

    #[test]
    fn test_shutdown_joins_the_worker() {
        let presenter = Arc::new(MockPresenterPort::default());
        let mut controller = InteractiveController::new(presenter);

        controller.submit_request(create_test_request());
        controller.shutdown();

        // worker is gone; further shutdowns are a no-op
        controller.shutdown();
    }

    #[test]
    fn test_drop_without_requests_does_not_hang() {
        let presenter = Arc::new(MockPresenterPort::default());
        let controller = InteractiveController::new(presenter);

        drop(controller);
    }
}
