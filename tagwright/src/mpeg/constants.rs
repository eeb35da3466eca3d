// MPEG-1 Layer III bitrates in kbps, indexed by the 4 bit bitrate index
//
// Index 0 ("free") and 15 (reserved) are unusable.
pub(super) const BITRATES: [u32; 16] = [
	0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
];

// MPEG-1 sample rates, indexed by the 2 bit sample rate index (3 is reserved)
pub(super) const SAMPLE_RATES: [u32; 3] = [44100, 48000, 32000];

// MPEG-1 Layer III frames always hold this many samples per channel
pub(super) const SAMPLES_PER_FRAME: u32 = 1152;

// Frame sync (11 bits), MPEG-1 (11), Layer III (01), no CRC (1)
pub(super) const FRAME_SYNC_MPEG1_LAYER3: [u8; 2] = [0xFF, 0xFB];
