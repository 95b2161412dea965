//! Defines Hermes-Tween background task runner.
use std::future::Future;

use log::error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::errors::Error;

/// Represents the result of a task.
/// A task may return either () or Result<(), Error> for flexibility: both are converted to a
/// TaskResult once the task is done.
pub enum TaskResult {
    Ok,
    Err(Error),
}

/// Represents the handler of a running task.
pub type TaskHandler = JoinHandle<Result<(), Error>>;

impl From<Result<(), Error>> for TaskResult {
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(_) => TaskResult::Ok,
            Err(e) => TaskResult::Err(e),
        }
    }
}

impl From<()> for TaskResult {
    fn from(_: ()) -> Self {
        TaskResult::Ok
    }
}

/// Runs a given future as a Tokio task on the current runtime.
///
/// # Parameters
/// * `future`: A future that implements `Future<Output = T>`, `Send`, and has a `'static` lifetime.
///
/// # Errors
/// Returns [`Error::RuntimeError`] if called outside a tokio runtime.
/// A task ending with an error is logged and reported through its handler.
///
/// # Example
/// ```
/// use hermes_tween::utils::task;
///
/// #[tokio::main]
/// async fn main() {
///     let handler = task::run(async move {
///         // whatever
///     }).unwrap();
///     handler.await.unwrap().unwrap();
/// }
/// ```
pub fn run<F, T>(future: F) -> Result<TaskHandler, Error>
where
    F: Future<Output = T> + Send + 'static,
    T: Into<TaskResult> + Send + 'static,
{
    let runtime = Handle::try_current()?;
    let handler = runtime.spawn(async move {
        match future.await.into() {
            TaskResult::Ok => Ok(()),
            TaskResult::Err(err) => {
                error!("Task ended with an error: {}", err);
                Err(err)
            }
        }
    });
    Ok(handler)
}

/// Pauses the current task for the given number of milliseconds.
#[macro_export]
macro_rules! pause {
    ($ms:expr) => {
        $crate::utils::tokio::time::sleep($crate::utils::tokio::time::Duration::from_millis($ms as u64))
            .await
    };
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU8, Ordering};
    use std::sync::Arc;

    use serial_test::serial;

    use crate::errors::{Error, RuntimeError, Unknown};
    use crate::utils::task;

    #[test]
    fn test_run_outside_runtime() {
        let result = task::run(async move {});
        assert!(matches!(result, Err(RuntimeError)));
    }

    #[serial]
    #[tokio::test]
    async fn test_task_abort_execution() {
        let flag = Arc::new(AtomicU8::new(0));
        let flag_clone = flag.clone();

        // Increment the flag after 100ms
        task::run(async move {
            pause!(100);
            flag_clone.fetch_add(1, Ordering::SeqCst);
        })
        .expect("Should not panic");

        // The flag should not have been incremented before the 100ms elapsed.
        pause!(50);
        assert_eq!(
            flag.load(Ordering::SeqCst),
            0,
            "Flag should not be updated by the task before 100ms",
        );

        // The flag should have been incremented after the 100ms elapsed.
        pause!(100);
        assert_eq!(
            flag.load(Ordering::SeqCst),
            1,
            "Flag should be updated by the task after 100ms",
        );

        // ######################
        // Same test but aborting
        let flag_clone = flag.clone();
        let handler = task::run(async move {
            pause!(100);
            flag_clone.fetch_add(1, Ordering::SeqCst);
        })
        .expect("Should not panic");

        pause!(50);
        handler.abort();

        pause!(100);
        assert_eq!(
            flag.load(Ordering::SeqCst),
            1,
            "Flag should not be updated by an aborted task",
        );
    }

    #[serial]
    #[tokio::test]
    async fn test_task_with_result() {
        let task = task::run(async move { Ok::<(), Error>(()) });
        assert!(task.is_ok(), "An Ok(()) task do not panic the runtime");
        assert!(task.unwrap().await.unwrap().is_ok());

        let task = task::run(async move {
            Err::<(), Error>(Unknown {
                info: "wow panic!".to_string(),
            })
        });
        assert!(task.is_ok(), "A failing task do not panic the runtime");
        assert!(matches!(task.unwrap().await.unwrap(), Err(Unknown { .. })));
    }
}
