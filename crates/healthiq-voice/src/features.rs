//! MFCC feature extraction.
//!
//! One fixed feature scheme shared with the offline training pipeline: 40
//! MFCCs per analysis frame, mean-pooled across time into a 40-dimensional
//! vector, then zero-padded (or truncated) to [`FEATURE_LEN`]. The scaler
//! and the network were fitted against exactly this shape — changing any
//! constant here silently breaks every prediction.

/// Waveform sample rate the pipeline operates at.
pub const SAMPLE_RATE: u32 = 22_050;

/// Fixed length of the feature vector fed to the scaler and the network.
pub const FEATURE_LEN: usize = 173;

/// Number of cepstral coefficients computed per frame.
pub const N_MFCC: usize = 40;

const FRAME_SIZE: usize = 1024;
const HOP_SIZE: usize = 512;
const N_MELS: usize = 64;

/// Extract the fixed-length feature vector for one waveform.
pub fn feature_vector(samples: &[f32]) -> Vec<f32> {
    let frames = mfcc_frames(samples);

    let mut pooled = vec![0.0f32; N_MFCC];
    for frame in &frames {
        for (acc, &coeff) in pooled.iter_mut().zip(frame) {
            *acc += coeff;
        }
    }
    let count = frames.len().max(1) as f32;
    for acc in &mut pooled {
        *acc /= count;
    }

    pad_or_truncate(pooled, FEATURE_LEN)
}

/// Zero-pad a vector up to `len`, or cut it down to `len`.
pub fn pad_or_truncate(mut values: Vec<f32>, len: usize) -> Vec<f32> {
    values.resize(len, 0.0);
    values
}

/// Per-frame MFCCs: Hann window, power spectrum, mel filterbank, log power,
/// orthonormal DCT-II.
fn mfcc_frames(samples: &[f32]) -> Vec<Vec<f32>> {
    let padded;
    let samples = if samples.len() < FRAME_SIZE {
        padded = {
            let mut p = samples.to_vec();
            p.resize(FRAME_SIZE, 0.0);
            p
        };
        padded.as_slice()
    } else {
        samples
    };

    let window = hann_window(FRAME_SIZE);
    let filterbank = mel_filterbank(N_MELS, FRAME_SIZE, SAMPLE_RATE as f32);

    let n_frames = (samples.len() - FRAME_SIZE) / HOP_SIZE + 1;
    let mut frames = Vec::with_capacity(n_frames);

    for frame_idx in 0..n_frames {
        let start = frame_idx * HOP_SIZE;
        let windowed: Vec<f32> = samples[start..start + FRAME_SIZE]
            .iter()
            .zip(&window)
            .map(|(&s, &w)| s * w)
            .collect();

        let spectrum = power_spectrum(&windowed);

        let mut log_mel = vec![0.0f32; N_MELS];
        for (band, filter) in filterbank.iter().enumerate() {
            let energy: f32 = filter
                .iter()
                .zip(&spectrum)
                .map(|(&coeff, &power)| coeff * power)
                .sum();
            log_mel[band] = 10.0 * energy.max(1e-10).log10();
        }

        frames.push(dct_ii_ortho(&log_mel, N_MFCC));
    }

    frames
}

fn hann_window(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let phase = 2.0 * std::f32::consts::PI * i as f32 / (size - 1) as f32;
            0.5 * (1.0 - phase.cos())
        })
        .collect()
}

/// Power spectrum of a windowed frame via direct real DFT. Returns N/2+1
/// bins.
fn power_spectrum(frame: &[f32]) -> Vec<f32> {
    let n = frame.len();
    let n_bins = n / 2 + 1;
    let mut spectrum = vec![0.0f32; n_bins];

    for (k, bin) in spectrum.iter_mut().enumerate() {
        let mut real = 0.0f32;
        let mut imag = 0.0f32;
        for (i, &sample) in frame.iter().enumerate() {
            let angle = -2.0 * std::f32::consts::PI * k as f32 * i as f32 / n as f32;
            real += sample * angle.cos();
            imag += sample * angle.sin();
        }
        *bin = (real * real + imag * imag) / (n as f32);
    }

    spectrum
}

/// Triangular mel filterbank: `n_bands` filters over N/2+1 spectrum bins.
fn mel_filterbank(n_bands: usize, frame_size: usize, sample_rate: f32) -> Vec<Vec<f32>> {
    let n_bins = frame_size / 2 + 1;
    let mel_max = hz_to_mel(sample_rate / 2.0);

    // n_bands + 2 evenly spaced mel points, converted to FFT bin positions.
    let bin_points: Vec<f32> = (0..n_bands + 2)
        .map(|i| {
            let mel = mel_max * i as f32 / (n_bands + 1) as f32;
            mel_to_hz(mel) * frame_size as f32 / sample_rate
        })
        .collect();

    let mut filterbank = Vec::with_capacity(n_bands);
    for band in 0..n_bands {
        let left = bin_points[band];
        let center = bin_points[band + 1];
        let right = bin_points[band + 2];

        let mut filter = vec![0.0f32; n_bins];
        for (bin, weight) in filter.iter_mut().enumerate() {
            let pos = bin as f32;
            if pos >= left && pos <= center && center > left {
                *weight = (pos - left) / (center - left);
            } else if pos > center && pos <= right && right > center {
                *weight = (right - pos) / (right - center);
            }
        }
        filterbank.push(filter);
    }

    filterbank
}

/// Orthonormal DCT-II, keeping the first `n_out` coefficients.
fn dct_ii_ortho(input: &[f32], n_out: usize) -> Vec<f32> {
    let n = input.len() as f32;
    (0..n_out)
        .map(|k| {
            let sum: f32 = input
                .iter()
                .enumerate()
                .map(|(i, &x)| {
                    x * (std::f32::consts::PI * k as f32 * (2.0 * i as f32 + 1.0) / (2.0 * n))
                        .cos()
                })
                .sum();
            let scale = if k == 0 {
                (1.0 / n).sqrt()
            } else {
                (2.0 / n).sqrt()
            };
            scale * sum
        })
        .collect()
}

fn hz_to_mel(hz: f32) -> f32 {
    2595.0 * (1.0 + hz / 700.0).log10()
}

fn mel_to_hz(mel: f32) -> f32 {
    700.0 * (10.0_f32.powf(mel / 2595.0) - 1.0)
}
