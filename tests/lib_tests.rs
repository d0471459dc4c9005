use xfertune::engine::progress_interval;
use xfertune::provider::{FamilyPolicy, ProviderRegistry};
use xfertune::{BufferSize, Profile, Workload, optimize, optimize_with_defaults};

fn workload(provider: &str, file_count: u64, total_bytes: u64) -> Workload {
    Workload {
        provider: provider.to_string(),
        file_count,
        total_bytes,
        is_download: false,
        latency_ms: None,
    }
}

// --- profile classification ---

#[test]
fn test_single_file_wins_over_extreme_latency() {
    let mut w = workload("s3", 1, 500_000_000_000);
    w.latency_ms = Some(10_000);
    let plan = optimize_with_defaults(&w);
    assert_eq!(plan.profile, Profile::SingleFile);
}

#[test]
fn test_high_latency_beats_size_rules() {
    let mut w = workload("s3", 500, 50_000_000); // avg 100k, would be ultra-fast
    w.latency_ms = Some(150);
    let plan = optimize_with_defaults(&w);
    assert_eq!(plan.profile, Profile::HighLatency);
}

#[test]
fn test_latency_at_threshold_is_not_high_latency() {
    let mut w = workload("s3", 500, 50_000_000);
    w.latency_ms = Some(100);
    let plan = optimize_with_defaults(&w);
    assert_eq!(plan.profile, Profile::UltraFast);
}

#[test]
fn test_ultra_fast_needs_many_small_files() {
    // avg 100k over 500 files
    let plan = optimize_with_defaults(&workload("s3", 500, 50_000_000));
    assert_eq!(plan.profile, Profile::UltraFast);
}

#[test]
fn test_exactly_fifty_files_is_not_ultra_fast() {
    // 50 files / 20 MB: small average, but file count must exceed 50
    let plan = optimize_with_defaults(&workload("s3", 50, 20_000_000));
    assert_eq!(plan.profile, Profile::Balanced);
}

#[test]
fn test_large_files_profile() {
    // avg 200 MB
    let plan = optimize_with_defaults(&workload("s3", 10, 2_000_000_000));
    assert_eq!(plan.profile, Profile::LargeFiles);
}

#[test]
fn test_average_at_large_threshold_is_not_large() {
    // avg exactly 100 MB: strict greater-than
    let plan = optimize_with_defaults(&workload("s3", 10, 1_000_000_000));
    assert_eq!(plan.profile, Profile::Balanced);
}

#[test]
fn test_low_latency_profile() {
    // 5 files, 2 MB
    let plan = optimize_with_defaults(&workload("s3", 5, 2_000_000));
    assert_eq!(plan.profile, Profile::LowLatency);
}

#[test]
fn test_zero_files_does_not_divide() {
    // degenerate batch: avg falls back to total_bytes
    let plan = optimize_with_defaults(&workload("s3", 0, 5_000_000));
    assert_eq!(plan.profile, Profile::LowLatency);
}

#[test]
fn test_balanced_fallback() {
    // 100 files, 500 MB: avg 5 MB, nothing special
    let plan = optimize_with_defaults(&workload("s3", 100, 500_000_000));
    assert_eq!(plan.profile, Profile::Balanced);
}

// --- buffer rules and stage order ---

#[test]
fn test_tiny_average_overrides_huge_total() {
    // >10 GB total AND tiny average: the volume rule bumps 16M->64M first,
    // then the tiny-average rule wins with 8M
    let plan = optimize_with_defaults(&workload("s3", 200_000, 11_000_000_000));
    assert_eq!(plan.profile, Profile::UltraFast);
    assert_eq!(plan.buffer_size, BufferSize::M8);
}

#[test]
fn test_huge_total_bumps_balanced_buffer() {
    // avg 55 MB over 200 files: balanced, 32M -> 128M past 10 GB
    let plan = optimize_with_defaults(&workload("unknowncloud", 200, 11_000_000_000));
    assert_eq!(plan.profile, Profile::Balanced);
    assert_eq!(plan.buffer_size, BufferSize::M128);
}

#[test]
fn test_huge_total_bumps_ultra_fast_buffer() {
    // avg 550k: ultra-fast, 16M -> 64M past 10 GB, average not tiny
    let plan = optimize_with_defaults(&workload("s3", 20_000, 11_000_000_000));
    assert_eq!(plan.profile, Profile::UltraFast);
    assert_eq!(plan.buffer_size, BufferSize::M64);
}

// --- provider clamps ---

#[test]
fn test_dropbox_clamps_ultra_fast() {
    let plan = optimize_with_defaults(&workload("dropbox", 200, 10_000_000));
    assert_eq!(plan.transfers, 8);
    assert_eq!(plan.checkers, 16);
}

#[test]
fn test_drive_clamps_ultra_fast() {
    let plan = optimize_with_defaults(&workload("googledrive", 200, 10_000_000));
    assert_eq!(plan.transfers, 12);
    assert_eq!(plan.checkers, 24);
}

#[test]
fn test_onedrive_clamps_ultra_fast() {
    let plan = optimize_with_defaults(&workload("onedrive", 200, 10_000_000));
    assert_eq!(plan.transfers, 10);
    assert_eq!(plan.checkers, 20);
}

#[test]
fn test_object_storage_is_unclamped() {
    let plan = optimize_with_defaults(&workload("s3", 200, 10_000_000));
    assert_eq!(plan.transfers, 32);
    assert_eq!(plan.checkers, 64);
}

#[test]
fn test_unknown_provider_gets_default_clamp() {
    let plan = optimize_with_defaults(&workload("unknowncloud", 200, 10_000_000));
    assert_eq!(plan.transfers, 16);
    assert_eq!(plan.checkers, 32);
}

#[test]
fn test_clamp_never_raises() {
    // low-latency base (4/8) is already under every cap
    let plan = optimize_with_defaults(&workload("dropbox", 5, 2_000_000));
    assert_eq!(plan.transfers, 4);
    assert_eq!(plan.checkers, 8);
}

// --- latency scaling ---

#[test]
fn test_latency_above_200_scales_parallelism() {
    let mut w = workload("s3", 5, 2_000_000);
    w.latency_ms = Some(250);
    let plan = optimize_with_defaults(&w);
    assert_eq!(plan.profile, Profile::HighLatency);
    assert_eq!(plan.transfers, 36); // 24 * 1.5
    assert_eq!(plan.checkers, 72); // 48 * 1.5
    assert_eq!(plan.buffer_size, BufferSize::M128); // 64M stepped up
}

#[test]
fn test_latency_between_100_and_200_only_reclassifies() {
    let mut w = workload("s3", 5, 2_000_000);
    w.latency_ms = Some(150);
    let plan = optimize_with_defaults(&w);
    assert_eq!(plan.profile, Profile::HighLatency);
    assert_eq!(plan.transfers, 24);
    assert_eq!(plan.checkers, 48);
    assert_eq!(plan.buffer_size, BufferSize::M64);
}

#[test]
fn test_latency_scaling_floors_odd_counts() {
    // single-file base is 1/8: 1.5x floors to 1 and 12, buffer pinned at top
    let mut w = workload("s3", 1, 500_000_000);
    w.latency_ms = Some(250);
    let plan = optimize_with_defaults(&w);
    assert_eq!(plan.profile, Profile::SingleFile);
    assert_eq!(plan.transfers, 1);
    assert_eq!(plan.checkers, 12);
    assert_eq!(plan.buffer_size, BufferSize::M128);
    assert_eq!(plan.multi_thread_streams, 16);
}

// --- chunk selection ---

#[test]
fn test_chunk_shrink_boundary() {
    // avg exactly 5 MB: strict less-than, no shrink
    let plan = optimize_with_defaults(&workload("s3", 2, 10_000_000));
    assert_eq!(plan.chunk_size.as_deref(), Some("64M"));

    // one byte under: shrinks
    let plan = optimize_with_defaults(&workload("s3", 2, 9_999_999));
    assert_eq!(plan.chunk_size.as_deref(), Some("16M"));
}

#[test]
fn test_chunk_shrink_map() {
    // dropbox 48M -> 12M, drive 32M -> 8M under a small average
    let plan = optimize_with_defaults(&workload("dropbox", 200, 10_000_000));
    assert_eq!(plan.chunk_size.as_deref(), Some("12M"));

    let plan = optimize_with_defaults(&workload("googledrive", 200, 10_000_000));
    assert_eq!(plan.chunk_size.as_deref(), Some("8M"));
}

#[test]
fn test_chunk_outside_shrink_map_passes_through() {
    // onedrive prefers 10M; not in the shrink map, stays 10M even for small files
    let plan = optimize_with_defaults(&workload("onedrive", 200, 10_000_000));
    assert_eq!(plan.chunk_size.as_deref(), Some("10M"));
}

#[test]
fn test_unknown_provider_has_no_chunk() {
    let plan = optimize_with_defaults(&workload("unknowncloud", 200, 10_000_000));
    assert_eq!(plan.chunk_size, None);
}

// --- progress interval ---

#[test]
fn test_progress_interval_per_profile() {
    assert_eq!(progress_interval(Profile::UltraFast, 1000), "1s");
    assert_eq!(progress_interval(Profile::UltraFast, 1001), "2s");
    assert_eq!(progress_interval(Profile::SingleFile, 1), "500ms");
    assert_eq!(progress_interval(Profile::LargeFiles, 5), "500ms");
    assert_eq!(progress_interval(Profile::LowLatency, 5), "2s");
    assert_eq!(progress_interval(Profile::Balanced, 100), "1s");
    assert_eq!(progress_interval(Profile::HighLatency, 100), "1s");
}

// --- flags ---

#[test]
fn test_flag_order_fast_list_then_direction_then_profile() {
    let mut w = workload("s3", 200, 10_000_000);
    w.is_download = true;
    let plan = optimize_with_defaults(&w);
    assert_eq!(
        plan.flags,
        vec![
            "--fast-list",
            "--no-check-dest",
            "--size-only",
            "--no-update-modtime"
        ]
    );
}

#[test]
fn test_balanced_upload_on_unknown_provider_has_no_flags() {
    let plan = optimize_with_defaults(&workload("unknowncloud", 100, 500_000_000));
    assert!(plan.flags.is_empty());
}

#[test]
fn test_high_latency_retry_flags() {
    let mut w = workload("unknowncloud", 5, 2_000_000);
    w.latency_ms = Some(300);
    let plan = optimize_with_defaults(&w);
    assert_eq!(plan.flags, vec!["--retries=5", "--low-level-retries=20"]);
}

// --- purity ---

#[test]
fn test_identical_inputs_identical_plans() {
    let mut w = workload("googledrive", 321, 4_321_000_000);
    w.is_download = true;
    w.latency_ms = Some(250);
    assert_eq!(optimize_with_defaults(&w), optimize_with_defaults(&w));
}

// --- end-to-end scenarios ---

#[test]
fn test_single_large_download_from_object_storage() {
    let mut w = workload("s3", 1, 5_000_000_000);
    w.is_download = true;
    let plan = optimize_with_defaults(&w);

    assert_eq!(plan.profile, Profile::SingleFile);
    assert_eq!(plan.transfers, 1);
    assert_eq!(plan.checkers, 8);
    assert_eq!(plan.buffer_size, BufferSize::M128);
    assert_eq!(plan.multi_thread_streams, 16);
    assert_eq!(plan.chunk_size.as_deref(), Some("64M"));
    assert_eq!(plan.progress_interval, "500ms");
    assert_eq!(plan.flags, vec!["--fast-list", "--no-check-dest", "--partial"]);
}

#[test]
fn test_small_file_batch_on_tightly_clamped_family() {
    // custom family: caps 8/16, 48M chunks, no fast listing
    let registry = ProviderRegistry::from_families(vec![FamilyPolicy {
        name: "fling".to_string(),
        matches: vec!["fling".to_string()],
        max_transfers: Some(8),
        max_checkers: Some(16),
        chunk_size: Some("48M".to_string()),
        chunk_flag: Some("--fling-chunk-size".to_string()),
        fast_list: false,
    }]);
    let w = workload("fling", 200, 10_000_000); // avg 50k
    let plan = optimize(&w, &registry);

    assert_eq!(plan.profile, Profile::UltraFast);
    assert_eq!(plan.transfers, 8);
    assert_eq!(plan.checkers, 16);
    assert_eq!(plan.buffer_size, BufferSize::M8);
    assert_eq!(plan.multi_thread_streams, 0);
    assert_eq!(plan.chunk_size.as_deref(), Some("12M"));
    assert_eq!(plan.progress_interval, "1s");
    assert_eq!(plan.flags, vec!["--size-only", "--no-update-modtime"]);
}

#[test]
fn test_high_latency_batch_on_object_storage() {
    let mut w = workload("s3", 5, 2_000_000);
    w.latency_ms = Some(250);
    let plan = optimize_with_defaults(&w);

    assert_eq!(plan.profile, Profile::HighLatency);
    assert_eq!(plan.transfers, 36);
    assert_eq!(plan.checkers, 72);
    assert_eq!(plan.buffer_size, BufferSize::M128);
    assert_eq!(plan.chunk_size.as_deref(), Some("16M")); // avg 400k shrinks 64M
    assert_eq!(plan.progress_interval, "1s");
    assert_eq!(
        plan.flags,
        vec!["--fast-list", "--retries=5", "--low-level-retries=20"]
    );
}
