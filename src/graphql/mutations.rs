//! GraphQL mutation documents.

pub const CREATE_COMMENT: &str = r#"
mutation CreateComment($input: CommentCreateInput!) {
  commentCreate(input: $input) {
    success
    comment {
      id
      body
      user {
        id
        name
        email
      }
      createdAt
      updatedAt
      issue {
        id
        identifier
        title
      }
    }
  }
}
"#;

pub const UPDATE_COMMENT: &str = r#"
mutation UpdateComment($id: String!, $input: CommentUpdateInput!) {
  commentUpdate(id: $id, input: $input) {
    success
    comment {
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
"#;

pub const DELETE_COMMENT: &str = r#"
mutation DeleteComment($id: String!) {
  commentDelete(id: $id) {
    success
  }
}
"#;

pub const CREATE_ISSUE: &str = r#"
mutation CreateIssue($input: IssueCreateInput!) {
  issueCreate(input: $input) {
    success
    issue {
      id
      identifier
      title
      url
      team {
        id
        name
      }
      project {
        id
        name
      }
    }
  }
}
"#;

pub const CREATE_ISSUES_BATCH: &str = r#"
mutation CreateIssuesBatch($input: IssueBatchCreateInput!) {
  issueBatchCreate(input: $input) {
    success
    issues {
      id
      identifier
      title
      url
    }
  }
}
"#;

pub const UPDATE_ISSUE: &str = r#"
mutation UpdateIssue($id: String!, $input: IssueUpdateInput!) {
  issueUpdate(id: $id, input: $input) {
    success
    issue {
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
"#;

pub const DELETE_ISSUE: &str = r#"
mutation DeleteIssue($id: String!) {
  issueDelete(id: $id) {
    success
  }
}
"#;

pub const CREATE_PROJECT: &str = r#"
mutation CreateProject($input: ProjectCreateInput!) {
  projectCreate(input: $input) {
    success
    project {
      id
      name
      url
    }
  }
}
"#;
