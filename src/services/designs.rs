use validator::Validate;

use crate::domain::design::Design;
use crate::domain::types::DesignId;
use crate::dto::designs::DesignListRequest;
use crate::pagination::Paginated;
use crate::repository::filter::{DesignFilter, DesignSort};
use crate::repository::{DesignListQuery, DesignReader};
use crate::services::{ServiceError, ServiceResult};

/// Resolves a listing request into one filtered, sorted page of designs.
///
/// Every active filter becomes a [`DesignFilter`] that the store
/// AND-combines. A non-empty tag set is first resolved through
/// [`DesignReader::design_ids_for_tags`]; when no design carries any of the
/// requested tags the result is empty without querying the designs table.
pub fn list_designs<R>(repo: &R, request: DesignListRequest) -> ServiceResult<Paginated<Design>>
where
    R: DesignReader + ?Sized,
{
    if let Err(err) = request.validate() {
        log::warn!("Rejected design listing request: {err}");
        return Err(ServiceError::Validation(err.to_string()));
    }

    let page = request.page;
    let per_page = request.page_size;

    let mut query = DesignListQuery::new()
        .sort(DesignSort::resolve(
            request.sort_by.as_deref(),
            request.sort_direction,
        ))
        .paginate(page, per_page);

    for filter in request.filters() {
        query = query.filter(filter);
    }

    if !request.tag_ids.is_empty() {
        let design_ids = repo
            .design_ids_for_tags(&request.tag_ids)
            .map_err(ServiceError::from)?;

        if design_ids.is_empty() {
            return Ok(Paginated::empty(page, per_page));
        }

        let mut design_ids = design_ids.into_iter().collect::<Vec<DesignId>>();
        design_ids.sort_unstable();
        query = query.filter(DesignFilter::IdIn(design_ids));
    }

    let (total, designs) = repo.list_designs(query).map_err(ServiceError::from)?;

    Ok(Paginated::new(designs, page, per_page, total))
}

/// Fetches a single design with its tags.
pub fn get_design<R>(repo: &R, design_id: DesignId) -> ServiceResult<Design>
where
    R: DesignReader + ?Sized,
{
    repo.get_design_by_id(design_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::types::TagId;
    use crate::repository::errors::RepositoryError;
    use crate::repository::filter::{SortDirection, SortField};
    use crate::repository::mock::MockRepository;

    fn tag(id: i32) -> TagId {
        TagId::new(id).unwrap()
    }

    #[test]
    fn invalid_request_never_reaches_the_store() {
        let repo = MockRepository::new();
        let request = DesignListRequest {
            page: 0,
            ..DesignListRequest::default()
        };

        let result = list_designs(&repo, request);
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn tags_without_matches_short_circuit() {
        let mut repo = MockRepository::new();
        repo.expect_design_ids_for_tags()
            .times(1)
            .returning(|_| Ok(HashSet::new()));
        repo.expect_list_designs().never();

        let request = DesignListRequest {
            tag_ids: vec![tag(7)],
            ..DesignListRequest::default()
        };

        let page = list_designs(&repo, request).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn resolved_tag_ids_become_an_id_filter() {
        let mut repo = MockRepository::new();
        repo.expect_design_ids_for_tags().returning(|_| {
            Ok([3, 1]
                .into_iter()
                .map(|id| DesignId::new(id).unwrap())
                .collect())
        });
        repo.expect_list_designs()
            .withf(|query| {
                query.filters
                    == vec![DesignFilter::IdIn(vec![
                        DesignId::new(1).unwrap(),
                        DesignId::new(3).unwrap(),
                    ])]
            })
            .returning(|_| Ok((2, Vec::new())));

        let request = DesignListRequest {
            tag_ids: vec![tag(1), tag(2)],
            ..DesignListRequest::default()
        };

        let page = list_designs(&repo, request).unwrap();
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn unknown_sort_column_is_passed_as_created_desc() {
        let mut repo = MockRepository::new();
        repo.expect_list_designs()
            .withf(|query| {
                query.sort == DesignSort::new(SortField::CreatedAt, SortDirection::Desc)
                    && query.pagination.map(|p| (p.page, p.per_page)) == Some((2, 5))
            })
            .returning(|_| Ok((0, Vec::new())));

        let request = DesignListRequest {
            page: 2,
            page_size: 5,
            sort_by: Some("popularity".to_string()),
            sort_direction: Some(SortDirection::Asc),
            ..DesignListRequest::default()
        };

        assert!(list_designs(&repo, request).is_ok());
    }

    #[test]
    fn store_failure_is_reported_as_query_error() {
        let mut repo = MockRepository::new();
        repo.expect_list_designs()
            .returning(|_| Err(RepositoryError::ConnectionError("pool closed".to_string())));

        let result = list_designs(&repo, DesignListRequest::default());
        match result {
            Err(ServiceError::Query(RepositoryError::ConnectionError(message))) => {
                assert_eq!(message, "pool closed");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_design_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_design_by_id().returning(|_| Ok(None));

        let result = get_design(&repo, DesignId::new(9).unwrap());
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
