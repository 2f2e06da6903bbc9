mod mixer;
mod output;
mod resampler;
mod sample;
