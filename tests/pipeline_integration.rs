//! End-to-end pipeline behavior over scripted sources and an in-memory sink

mod common;

use common::{company, order, product, Behavior, StaticSource};
use ordersum::models::Summary;
use ordersum::pipeline::{self, PipelineOutcome};
use ordersum::sink::MemorySink;
use ordersum::Error;

fn acme_source() -> StaticSource {
    StaticSource::new(
        Behavior::Found(vec![company(1, "Acme")]),
        Behavior::Found(vec![product(10, "Tools", 999)]),
    )
    .with_orders(1, Behavior::Found(vec![order(100, 10, 2)]))
}

#[tokio::test]
async fn test_single_company_summary_and_upload() {
    let source = acme_source();
    let sink = MemorySink::new();

    let outcome = pipeline::run(&source, &sink).await.unwrap();

    let summaries = match outcome {
        PipelineOutcome::Summaries(s) => s,
        other => panic!("expected summaries, got {other:?}"),
    };
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].company_id, 1);
    assert_eq!(summaries[0].company_name, "Acme");
    assert_eq!(summaries[0].orders.len(), 1);
    assert_eq!(summaries[0].orders[0].category, "Tools");

    // The uploaded document is the serialized response.
    let uploaded = sink.last_document().expect("summary was uploaded");
    assert_eq!(
        uploaded,
        r#"[{"companyId":1,"companyName":"Acme","orders":[{"orderId":100,"itemId":10,"category":"Tools","price":9.99,"amount":2.0}]}]"#
    );
    let round_trip: Vec<Summary> = serde_json::from_str(&uploaded).unwrap();
    assert_eq!(round_trip, summaries);
}

#[tokio::test]
async fn test_every_company_gets_a_summary() {
    let source = StaticSource::new(
        Behavior::Found(vec![
            company(1, "Acme"),
            company(2, "Globex"),
            company(3, "Initech"),
        ]),
        Behavior::Found(vec![product(10, "Tools", 999)]),
    )
    .with_orders(2, Behavior::Found(vec![order(200, 10, 1)]));

    let sink = MemorySink::new();
    let outcome = pipeline::run(&source, &sink).await.unwrap();

    let summaries = match outcome {
        PipelineOutcome::Summaries(s) => s,
        other => panic!("expected summaries, got {other:?}"),
    };

    // One entry per company, in source order, empty order lists included.
    assert_eq!(summaries.len(), 3);
    assert_eq!(
        summaries.iter().map(|s| s.company_id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert!(summaries[0].orders.is_empty());
    assert_eq!(summaries[1].orders.len(), 1);
    assert!(summaries[2].orders.is_empty());
}

#[tokio::test]
async fn test_unmatched_orders_leave_company_list_empty() {
    let source = StaticSource::new(
        Behavior::Found(vec![company(1, "Acme")]),
        Behavior::Found(vec![product(10, "Tools", 999)]),
    )
    .with_orders(1, Behavior::Found(vec![order(101, 999, 1)]));

    let sink = MemorySink::new();
    let outcome = pipeline::run(&source, &sink).await.unwrap();

    match outcome {
        PipelineOutcome::Summaries(summaries) => {
            assert_eq!(summaries.len(), 1);
            assert!(summaries[0].orders.is_empty());
        }
        other => panic!("expected summaries, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_products_returns_companies_and_skips_upload() {
    let companies = vec![company(1, "Acme"), company(2, "Globex")];
    let source = StaticSource::new(Behavior::Found(companies.clone()), Behavior::Empty)
        .with_orders(1, Behavior::Found(vec![order(100, 10, 2)]));

    let sink = MemorySink::new();
    let outcome = pipeline::run(&source, &sink).await.unwrap();

    match outcome {
        PipelineOutcome::CompaniesOnly(returned) => assert_eq!(returned, companies),
        other => panic!("expected companies-only outcome, got {other:?}"),
    }

    // Short-circuit: no upload, and no per-company order fetches either.
    assert_eq!(sink.upload_count(), 0);
    assert_eq!(source.order_fetches(), 0);
}

#[tokio::test]
async fn test_products_fetch_failure_degrades_to_companies_only() {
    let source = StaticSource::new(
        Behavior::Found(vec![company(1, "Acme")]),
        Behavior::Fail,
    );

    let sink = MemorySink::new();
    let outcome = pipeline::run(&source, &sink).await.unwrap();

    assert!(matches!(outcome, PipelineOutcome::CompaniesOnly(_)));
    assert_eq!(sink.upload_count(), 0);
}

#[tokio::test]
async fn test_empty_companies_is_not_found_and_skips_upload() {
    let source = StaticSource::new(
        Behavior::Empty,
        Behavior::Found(vec![product(10, "Tools", 999)]),
    );

    let sink = MemorySink::new();
    let outcome = pipeline::run(&source, &sink).await.unwrap();

    assert!(matches!(outcome, PipelineOutcome::NoCompanies));
    assert_eq!(sink.upload_count(), 0);
}

#[tokio::test]
async fn test_companies_fetch_failure_aborts() {
    let source = StaticSource::new(
        Behavior::Fail,
        Behavior::Found(vec![product(10, "Tools", 999)]),
    );

    let sink = MemorySink::new();
    let err = pipeline::run(&source, &sink).await.unwrap_err();

    match err {
        Error::Fetch { source_name, .. } => assert_eq!(source_name, "companies"),
        other => panic!("expected fetch error, got {other:?}"),
    }
    assert_eq!(sink.upload_count(), 0);
}

#[tokio::test]
async fn test_orders_fetch_failure_is_tolerated() {
    let source = StaticSource::new(
        Behavior::Found(vec![company(1, "Acme"), company(2, "Globex")]),
        Behavior::Found(vec![product(10, "Tools", 999)]),
    )
    .with_orders(1, Behavior::Fail)
    .with_orders(2, Behavior::Found(vec![order(200, 10, 3)]));

    let sink = MemorySink::new();
    let outcome = pipeline::run(&source, &sink).await.unwrap();

    match outcome {
        PipelineOutcome::Summaries(summaries) => {
            assert_eq!(summaries.len(), 2);
            assert!(summaries[0].orders.is_empty());
            assert_eq!(summaries[1].orders.len(), 1);
        }
        other => panic!("expected summaries, got {other:?}"),
    }
    assert_eq!(sink.upload_count(), 1);
}

#[tokio::test]
async fn test_sink_failure_does_not_fail_the_request() {
    let source = acme_source();
    let sink = MemorySink::failing();

    let outcome = pipeline::run(&source, &sink).await.unwrap();

    assert!(matches!(outcome, PipelineOutcome::Summaries(_)));
    assert_eq!(sink.upload_count(), 1);
    assert_eq!(sink.last_document(), None);
}

#[tokio::test]
async fn test_identical_inputs_produce_identical_documents() {
    let sink_a = MemorySink::new();
    let sink_b = MemorySink::new();

    pipeline::run(&acme_source(), &sink_a).await.unwrap();
    pipeline::run(&acme_source(), &sink_b).await.unwrap();

    assert_eq!(sink_a.last_document(), sink_b.last_document());
}
