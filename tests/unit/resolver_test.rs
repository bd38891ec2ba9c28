//! Unit tests for channel identity resolution.
//!
//! Pure URL-shape extraction plus the search-backed resolution path with
//! the YouTube API mocked out.

use async_trait::async_trait;
use rstest::rstest;

use youroute::error::{AppError, AppResult};
use youroute::services::{parse_channel_ref, resolve_channel_id, ChannelRef};
use youroute::youtube::YouTubeApi;

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
#[case("https://www.youtube.com/channel/UCabc123", "UCabc123")]
#[case("https://youtube.com/channel/UCabc123/videos", "UCabc123")]
#[case("https://youtube.com/channel/UCabc123?view_as=subscriber", "UCabc123")]
#[case("https://youtube.com/channel/UCabc123#featured", "UCabc123")]
fn direct_ids_are_extracted_exactly(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(
        parse_channel_ref(url),
        Some(ChannelRef::Direct(expected.to_string()))
    );
}

#[rstest]
#[case("https://youtube.com/@somestreamer", "somestreamer")]
#[case("https://www.youtube.com/@somestreamer/streams", "somestreamer")]
#[case("https://youtube.com/@somestreamer?si=xyz", "somestreamer")]
fn handles_are_extracted(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(
        parse_channel_ref(url),
        Some(ChannelRef::Handle(expected.to_string()))
    );
}

#[rstest]
#[case("https://youtube.com/somestreamer", "somestreamer")]
#[case("https://www.youtube.com/c0oln4me/about", "c0oln4me")]
fn custom_names_fall_back_to_the_first_segment(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(
        parse_channel_ref(url),
        Some(ChannelRef::CustomName(expected.to_string()))
    );
}

#[rstest]
#[case("https://twitch.tv/somestreamer")]
#[case("no scheme, no domain")]
#[case("")]
#[case("https://youtube.com/")]
#[case("https://youtube.com/channel/")]
#[case("https://youtube.com/@")]
fn unrecognizable_urls_yield_none(#[case] url: &str) {
    assert_eq!(parse_channel_ref(url), None);
}

// =============================================================================
// Search-backed resolution
// =============================================================================

struct StubApi {
    channel_result: AppResult<Option<String>>,
}

#[async_trait]
impl YouTubeApi for StubApi {
    async fn search_channel(&self, _query: &str) -> AppResult<Option<String>> {
        match &self.channel_result {
            Ok(r) => Ok(r.clone()),
            Err(_) => Err(AppError::Upstream("stub failure".to_string())),
        }
    }

    async fn has_live_stream(&self, _channel_id: &str) -> AppResult<bool> {
        panic!("resolution must not check liveness");
    }
}

#[tokio::test]
async fn direct_urls_skip_the_search() {
    // A stub that errors on every search proves the direct path never calls it.
    let api = StubApi {
        channel_result: Err(AppError::Upstream("unused".to_string())),
    };

    let resolved = resolve_channel_id(&api, "https://youtube.com/channel/UCdirect")
        .await
        .unwrap();
    assert_eq!(resolved.as_deref(), Some("UCdirect"));
}

#[tokio::test]
async fn handles_resolve_through_the_search() {
    let api = StubApi {
        channel_result: Ok(Some("UCfound".to_string())),
    };

    let resolved = resolve_channel_id(&api, "https://youtube.com/@somestreamer")
        .await
        .unwrap();
    assert_eq!(resolved.as_deref(), Some("UCfound"));
}

#[tokio::test]
async fn empty_search_results_resolve_to_none() {
    let api = StubApi {
        channel_result: Ok(None),
    };

    let resolved = resolve_channel_id(&api, "https://youtube.com/@ghost")
        .await
        .unwrap();
    assert_eq!(resolved, None);
}

#[tokio::test]
async fn search_failures_fold_into_none() {
    let api = StubApi {
        channel_result: Err(AppError::Upstream("boom".to_string())),
    };

    // A failed search is "not found", never a hard error for the caller.
    let resolved = resolve_channel_id(&api, "https://youtube.com/@somestreamer")
        .await
        .unwrap();
    assert_eq!(resolved, None);
}

#[tokio::test]
async fn unrecognizable_urls_resolve_to_none_without_searching() {
    let api = StubApi {
        channel_result: Err(AppError::Upstream("unused".to_string())),
    };

    let resolved = resolve_channel_id(&api, "https://example.com/whatever")
        .await
        .unwrap();
    assert_eq!(resolved, None);
}
