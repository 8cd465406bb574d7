use tracing::{error, info};

/// User-visible error channel.
pub trait Notifier {
    fn notify_error(&self, message: &str);
}

pub trait LoadingIndicator {
    fn set_loading(&self, active: bool);
}

/// Keeps the loading indicator on for as long as it lives.
#[must_use]
pub struct LoadingGuard<'a, L: LoadingIndicator> {
    indicator: &'a L,
}

impl<'a, L: LoadingIndicator> LoadingGuard<'a, L> {
    pub fn new(indicator: &'a L) -> Self {
        indicator.set_loading(true);
        LoadingGuard { indicator }
    }
}

impl<L: LoadingIndicator> Drop for LoadingGuard<'_, L> {
    fn drop(&mut self) {
        self.indicator.set_loading(false);
    }
}

pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_error(&self, message: &str) {
        error!(user_message = message, "{message}");
    }
}

pub struct LogLoading;

impl LoadingIndicator for LogLoading {
    fn set_loading(&self, active: bool) {
        if active {
            info!("Loading...");
        } else {
            info!("Done");
        }
    }
}

#[cfg(test)]
mod test {
    use super::LoadingGuard;
    use crate::test::RecordingLoading;

    #[test]
    fn guard_toggles_once() {
        let loading = RecordingLoading::default();
        {
            let _guard = LoadingGuard::new(&loading);
            assert!(loading.active());
        }
        assert!(!loading.active());
        assert_eq!(vec![true, false], loading.transitions());
    }

    #[test]
    fn guard_released_on_early_return() {
        fn fail(loading: &RecordingLoading) -> Result<(), &'static str> {
            let _guard = LoadingGuard::new(loading);
            "boom".parse::<i32>().map_err(|_| "boom")?;
            Ok(())
        }
        let loading = RecordingLoading::default();
        assert!(fail(&loading).is_err());
        assert_eq!(vec![true, false], loading.transitions());
    }
}
