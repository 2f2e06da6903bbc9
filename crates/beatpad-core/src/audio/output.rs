use crate::{
    CoreError, CoreResult,
    audio::{SampleHandle, SoundSink, mixer::Mixer},
};

use std::panic::Location;

use cpal::{
    Device, FromSample, Sample, SampleFormat, SizedSample, Stream, StreamConfig,
    SupportedStreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use error_location::ErrorLocation;
use tracing::{error, info, instrument, warn};

/// Pending play requests the callback can fall behind by before new ones
/// are refused.
const COMMAND_QUEUE_DEPTH: usize = 256;

/// Frames the mix buffer is sized for up front; larger callbacks grow it.
const MIX_BUFFER_FRAMES: usize = 4096;

/// Owns the cpal output stream. Dropping it silences the output.
pub struct AudioOutput {
    stream: Stream,
    sink: OutputSink,
    sample_rate: u32,
    channels: u16,
}

/// Cloneable [`SoundSink`] feeding the output stream's mixer.
#[derive(Clone)]
pub struct OutputSink {
    tx: Sender<SampleHandle>,
}

impl AudioOutput {
    /// Open an output device and start the mixing stream.
    ///
    /// `device_name` selects a device by name; `None` (or a name that is not
    /// found) uses the host default.
    ///
    /// # Errors
    ///
    /// Returns error if no output device exists, the device offers no sample
    /// format the mixer can convert to, or the stream cannot be started.
    #[track_caller]
    #[instrument]
    pub fn open(device_name: Option<&str>, volume: f32) -> CoreResult<Self> {
        let device = Self::select_device(device_name)?;

        let supported = Self::select_config(&device)?;
        let sample_format = supported.sample_format();
        let config: StreamConfig = supported.into();
        let channels = config.channels;
        let sample_rate = config.sample_rate;

        let (tx, rx) = crossbeam_channel::bounded::<SampleHandle>(COMMAND_QUEUE_DEPTH);
        let stream = match sample_format {
            SampleFormat::F32 => Self::build_stream::<f32>(&device, &config, rx, volume)?,
            SampleFormat::I16 => Self::build_stream::<i16>(&device, &config, rx, volume)?,
            SampleFormat::I32 => Self::build_stream::<i32>(&device, &config, rx, volume)?,
            SampleFormat::U16 => Self::build_stream::<u16>(&device, &config, rx, volume)?,
            other => {
                return Err(CoreError::DeviceError {
                    reason: format!("Unsupported output sample format {:?}", other),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        stream.play().map_err(|e| CoreError::DeviceError {
            reason: format!("Failed to start output stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(
            sample_rate,
            channels,
            format = ?sample_format,
            volume,
            "Audio output started"
        );

        Ok(Self {
            stream,
            sink: OutputSink { tx },
            sample_rate,
            channels,
        })
    }

    /// Sink that plays through this output.
    pub fn sink(&self) -> OutputSink {
        self.sink.clone()
    }

    /// Output rate; samples should be converted to this before playing.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of interleaved output channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Pause the stream, e.g. on shutdown, before it is dropped.
    pub fn pause(&self) {
        if let Err(e) = self.stream.pause() {
            warn!(error = %e, "Failed to pause output stream");
        }
    }

    #[track_caller]
    fn select_device(device_name: Option<&str>) -> CoreResult<Device> {
        let host = cpal::default_host();

        if let Some(wanted) = device_name {
            let found = host.output_devices().ok().and_then(|mut devices| {
                devices.find(|d| d.name().map(|n| n.trim() == wanted).unwrap_or(false))
            });
            match found {
                Some(device) => return Ok(device),
                None => warn!(device = wanted, "Output device not found, using default"),
            }
        }

        host.default_output_device().ok_or(CoreError::NoOutputDevice {
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// The default config, swapped for an f32 config at the same rate and
    /// channel count when the default is an integer format.
    #[track_caller]
    fn select_config(device: &Device) -> CoreResult<SupportedStreamConfig> {
        let default = device
            .default_output_config()
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to get output config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if default.sample_format() == SampleFormat::F32 {
            return Ok(default);
        }

        let sample_rate = default.sample_rate();
        let float = device.supported_output_configs().ok().and_then(|mut configs| {
            configs.find(|c| {
                c.sample_format() == SampleFormat::F32
                    && c.channels() == default.channels()
                    && c.min_sample_rate() <= sample_rate
                    && sample_rate <= c.max_sample_rate()
            })
        });

        match float {
            Some(range) => Ok(range.with_sample_rate(sample_rate)),
            None => {
                info!(
                    format = ?default.sample_format(),
                    "No f32 output config, converting samples"
                );
                Ok(default)
            }
        }
    }

    #[track_caller]
    fn build_stream<T>(
        device: &Device,
        config: &StreamConfig,
        rx: Receiver<SampleHandle>,
        volume: f32,
    ) -> CoreResult<Stream>
    where
        T: SizedSample + FromSample<f32>,
    {
        let channels = usize::from(config.channels);
        let mut mixer = Mixer::new(volume);
        let mut mixed: Vec<f32> = Vec::with_capacity(MIX_BUFFER_FRAMES * channels);

        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    while let Ok(sample) = rx.try_recv() {
                        mixer.trigger(sample);
                    }
                    mixed.resize(data.len(), 0.0);
                    mixer.render(&mut mixed, channels);
                    write_converted(&mixed, data);
                },
                |err| {
                    error!("Audio output stream error: {}", err);
                },
                None,
            )
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to build output stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Copy mixed f32 frames into the device's sample format.
pub(crate) fn write_converted<T: Sample + FromSample<f32>>(mixed: &[f32], out: &mut [T]) {
    for (dst, &src) in out.iter_mut().zip(mixed) {
        *dst = T::from_sample(src);
    }
}

impl SoundSink for OutputSink {
    #[track_caller]
    fn play(&self, sample: &SampleHandle) -> CoreResult<()> {
        match self.tx.try_send(SampleHandle::clone(sample)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(CoreError::AudioQueueFull {
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(TrySendError::Disconnected(_)) => Err(CoreError::DeviceError {
                reason: "Output stream has stopped".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
