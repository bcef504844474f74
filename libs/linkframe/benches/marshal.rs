use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{thread_rng, Rng};

use linkframe::frame::components::{MacAddress, SequenceControl, Tag8021Q};
use linkframe::frame::{EthernetFrame, Frame80211};
use linkframe::{EtherType, WireFrame};

fn random_payload() -> Vec<u8> {
    let mut payload = vec![0u8; 1024];
    thread_rng().fill(&mut payload[..]);
    payload
}

pub fn marshal_ethernet(crit: &mut Criterion) {
    let mut frame = EthernetFrame::new(
        MacAddress::random(),
        MacAddress::random(),
        EtherType::IPV4,
        random_payload(),
    );
    frame.set_tag(Some(Tag8021Q::new(3, false, 1024)));

    // Log raw byte throughput
    let mut group = crit.benchmark_group("marshal");
    group.throughput(Throughput::Bytes(frame.size() as u64));

    group.bench_function("Marshal ethernet", |bencher| {
        bencher.iter(|| frame.marshal())
    });

    // Reusing the buffer leaves only the encoding and the checksum.
    let mut buf = Vec::with_capacity(frame.size());
    group.bench_function("Marshal ethernet into buffer", |bencher| {
        bencher.iter(|| {
            buf.clear();
            frame.marshal_into(&mut buf);
        })
    });
    group.finish()
}

pub fn marshal_80211(crit: &mut Criterion) {
    let mut frame = Frame80211::new(
        MacAddress::random(),
        MacAddress::random(),
        MacAddress::random(),
        Some(MacAddress::random()),
        random_payload(),
    );
    frame.set_sequence_control(Some(SequenceControl::new(0, 42)));

    let mut group = crit.benchmark_group("marshal");
    group.throughput(Throughput::Bytes(frame.size() as u64));

    group.bench_function("Marshal 802.11", |bencher| {
        bencher.iter(|| frame.marshal())
    });
    group.finish()
}

criterion_group!(benches, marshal_ethernet, marshal_80211);
criterion_main!(benches);
