use crate::dto::api::RecordsResponse;
use crate::pipeline;
use crate::query;
use crate::repository::RecordReader;

/// Computes the JSON page for the query string of the request.
pub fn list_records<R>(repo: &R, query: &str) -> RecordsResponse
where
    R: RecordReader + ?Sized,
{
    let state = query::parse(query);
    let rendered = pipeline::render(repo.list_records(), &state);

    RecordsResponse {
        total: rendered.total,
        page: state.current_page,
        page_count: rendered.page_count,
        records: rendered.records.into_iter().cloned().collect(),
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;

    #[test]
    fn returns_matching_page() {
        let repo = vec![
            Record::new(1, "Bob", "", "Elm", "1"),
            Record::new(2, "amy", "", "Oak", "2"),
        ];

        let response = list_records(&repo, "filter=AM");

        assert_eq!(response.total, 1);
        assert_eq!(response.page_count, 1);
        assert_eq!(response.records, vec![repo[1].clone()]);
    }
}
