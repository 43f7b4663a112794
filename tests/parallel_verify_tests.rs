// This attribute ensures the entire file is only compiled and run when
// the "parallel" feature is enabled.
#![cfg(feature = "parallel")]

use castagnoli_frame::constants::FRAME_SIZE;
use castagnoli_frame::{encode_frame, par_verify_frames, verify_frames};

fn sealed_frames(count: u64) -> Vec<u8> {
    (0..count).flat_map(|i| encode_frame(&i.to_le_bytes())).collect()
}

#[test]
fn test_par_verify_matches_sequential() {
    let mut data = sealed_frames(10_000);
    for index in [3usize, 512, 9_999] {
        data[index * FRAME_SIZE] ^= 0x01;
    }

    let sequential = verify_frames(&data).expect("Sequential verify failed");
    let parallel = par_verify_frames(&data).expect("Parallel verify failed");

    assert_eq!(sequential, parallel);
    assert_eq!(parallel.invalid, vec![3, 512, 9_999]);
}

#[test]
fn test_par_verify_rejects_misaligned_input() {
    let data = sealed_frames(2);
    assert!(par_verify_frames(&data[..FRAME_SIZE + 1]).is_err());
}
