//! GraphQL query documents.

pub const GET_ISSUE_COMMENTS: &str = r#"
query GetIssueComments($issueId: String!, $first: Int, $after: String) {
  issue(id: $issueId) {
    comments(first: $first, after: $after) {
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        id
        body
        user {
          id
          name
          email
        }
        createdAt
        updatedAt
      }
    }
  }
}
"#;

pub const SEARCH_ISSUES: &str = r#"
query SearchIssues($filter: IssueFilter, $first: Int, $after: String) {
  issues(filter: $filter, first: $first, after: $after) {
    pageInfo {
      hasNextPage
      endCursor
    }
    nodes {
      id
      identifier
      title
      description
      url
      priority
      estimate
      state {
        id
        name
      }
      assignee {
        id
        name
      }
      team {
        id
        name
      }
      project {
        id
        name
      }
      labels {
        nodes {
          id
          name
        }
      }
      createdAt
      updatedAt
    }
  }
}
"#;

pub const GET_PROJECT: &str = r#"
query GetProject($id: String!) {
  project(id: $id) {
    id
    name
    description
    url
    state
    progress
    startDate
    targetDate
    lead {
      id
      name
    }
    teams {
      nodes {
        id
        name
      }
    }
    issues {
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        id
        identifier
        title
        url
        state {
          name
        }
      }
    }
  }
}
"#;

pub const SEARCH_PROJECTS: &str = r#"
query SearchProjects($filter: ProjectFilter, $first: Int, $after: String) {
  projects(filter: $filter, first: $first, after: $after) {
    pageInfo {
      hasNextPage
      endCursor
    }
    nodes {
      id
      name
      description
      url
      state
      progress
      startDate
      targetDate
      lead {
        id
        name
      }
      teams {
        nodes {
          id
          name
        }
      }
    }
  }
}
"#;

pub const GET_TEAMS: &str = r#"
query GetTeams {
  teams {
    nodes {
      id
      name
      key
      states {
        nodes {
          id
          name
          type
        }
      }
    }
  }
}
"#;

pub const GET_VIEWER: &str = r#"
query GetViewer {
  viewer {
    id
    name
    email
    displayName
    teams {
      nodes {
        id
        name
        key
      }
    }
  }
}
"#;
