use core::fmt::Arguments;

/// Destination for the driver's diagnostic output.
///
/// `log` carries debug traces (only emitted when the driver was built with
/// debug on), `error` carries rejected or clamped inputs.
pub trait Logger {
    fn log(&mut self, message: Arguments<'_>);
    fn error(&mut self, message: Arguments<'_>);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&mut self, _message: Arguments<'_>) {}
    fn error(&mut self, _message: Arguments<'_>) {}
}

/// Forwards to the global `defmt` logger.
#[cfg(feature = "defmt")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DefmtLogger;

#[cfg(feature = "defmt")]
impl Logger for DefmtLogger {
    fn log(&mut self, message: Arguments<'_>) {
        defmt::debug!("{}", defmt::Display2Format(&message));
    }

    fn error(&mut self, message: Arguments<'_>) {
        defmt::error!("{}", defmt::Display2Format(&message));
    }
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn log(&mut self, message: Arguments<'_>) {
        (**self).log(message);
    }

    fn error(&mut self, message: Arguments<'_>) {
        (**self).error(message);
    }
}
