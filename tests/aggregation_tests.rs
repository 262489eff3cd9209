// Aggregation: status counts, histogram bins, trend series

mod common;

use common::batch;
use imei_status::aggregation::{aggregate, histogram, status_counts, trend};
use imei_status::classifier::reclassify;
use imei_status::models::{StatusCounts, TrendPoint};

#[test]
fn status_counts_two_device_scenario() {
    let b = reclassify(&batch(&[0, 5]), 30);
    assert_eq!(
        status_counts(&b.devices, 30),
        StatusCounts {
            online: 1,
            observation: 0,
            offline: 1
        }
    );

    let lowered = reclassify(&b, 3);
    assert_eq!(
        status_counts(&lowered.devices, 3),
        StatusCounts {
            online: 1,
            observation: 1,
            offline: 0
        }
    );
}

#[test]
fn status_counts_partition_every_device() {
    let b = batch(&[0, 0, 1, 2, 3, 7, 15, 40, 90]);
    for threshold in [0, 3, 10, 45, 90] {
        let b = reclassify(&b, threshold);
        let counts = status_counts(&b.devices, threshold);
        assert_eq!(counts.total(), b.devices.len(), "threshold={threshold}");
    }
}

#[test]
fn status_counts_empty_batch() {
    assert_eq!(status_counts(&[], 10), StatusCounts::default());
}

#[test]
fn histogram_bins_are_filtered_by_lower_bound() {
    let b = batch(&[0, 1, 4, 9, 20, 45, 61, 70]);

    let ranges: Vec<&str> = histogram(&b.devices, 45).iter().map(|h| h.range).collect();
    assert_eq!(
        ranges,
        vec!["0 dias", "1-2 dias", "3-7 dias", "8-15 dias", "16-30 dias", "31-60 dias"]
    );

    let bins = histogram(&b.devices, 65);
    let last = bins.last().unwrap();
    assert_eq!(last.range, "60+ dias");
    assert_eq!(last.count, 2);
    assert_eq!(last.upper, None);
}

#[test]
fn histogram_threshold_zero_has_only_first_bin() {
    let b = batch(&[0, 0, 3]);
    let bins = histogram(&b.devices, 0);
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].range, "0 dias");
    assert_eq!(bins[0].count, 2);
}

#[test]
fn histogram_bin_edges_are_inclusive() {
    let b = batch(&[2, 3, 7, 8, 15, 16, 30, 31, 60, 61]);
    let counts: Vec<usize> = histogram(&b.devices, 100).iter().map(|h| h.count).collect();
    // 0, 1-2, 3-7, 8-15, 16-30, 31-60, 60+
    assert_eq!(counts, vec![0, 1, 2, 2, 2, 2, 1]);
}

#[test]
fn trend_is_a_sorted_frequency_distribution_within_threshold() {
    let b = batch(&[5, 0, 5, 2, 0, 0, 40]);
    assert_eq!(
        trend(&b.devices, 10),
        vec![
            TrendPoint {
                days_offline: 0,
                count: 3
            },
            TrendPoint {
                days_offline: 2,
                count: 1
            },
            TrendPoint {
                days_offline: 5,
                count: 2
            },
        ]
    );
}

#[test]
fn trend_counts_sum_to_visible_devices() {
    let b = batch(&[0, 1, 3, 3, 8, 12, 50]);
    for threshold in [0, 3, 12, 50] {
        let visible = b.devices.iter().filter(|d| d.days_offline <= threshold).count();
        let total: usize = trend(&b.devices, threshold).iter().map(|p| p.count).sum();
        assert_eq!(total, visible, "threshold={threshold}");
    }
}

#[test]
fn aggregate_combines_all_reductions() {
    let b = reclassify(&batch(&[0, 1, 6]), 6);
    let stats = aggregate(&b.devices, 6);
    assert_eq!(stats.threshold, 6);
    assert_eq!(stats.status_counts.online, 1);
    assert_eq!(stats.status_counts.observation, 1);
    assert_eq!(stats.status_counts.offline, 1);
    assert_eq!(stats.histogram.len(), 3);
    assert_eq!(stats.trend.len(), 3);
}
