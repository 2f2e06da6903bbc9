mod audio;
mod support;
