pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const GITHUB_WEB_URL: &str = "https://github.com";
pub const USER_AGENT: &str = concat!("review-notifier/", env!("CARGO_PKG_VERSION"));

/// Fixed for every outbound call, not configurable.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Environment variable names
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_PROJECT_ID: &str = "PROJECT_ID";
pub const ENV_PROJECT_OWNER: &str = "PROJECT_OWNER";
pub const ENV_PROJECT_NUMBER: &str = "PROJECT_NUMBER";
pub const ENV_PROJECT_VIEW_NUMBER: &str = "PROJECT_VIEW_NUMBER";
pub const ENV_WEBHOOK_URL: &str = "MATTERMOST_WEBHOOK_URL";
pub const ENV_TARGET_STATUS: &str = "TARGET_STATUS";
pub const ENV_STATUS_FIELD_NAME: &str = "STATUS_FIELD_NAME";
pub const ENV_INSECURE_SKIP_VERIFY: &str = "INSECURE_SKIP_VERIFY";
pub const ENV_GRAPHQL_URL: &str = "GITHUB_GRAPHQL_URL";
pub const ENV_WEB_URL: &str = "GITHUB_WEB_URL";
pub const ENV_WEBHOOK_USERNAME: &str = "MATTERMOST_USERNAME";
pub const ENV_WEBHOOK_ICON_EMOJI: &str = "MATTERMOST_ICON_EMOJI";
pub const ENV_WEBHOOK_CHANNEL: &str = "MATTERMOST_CHANNEL";

pub const DEFAULT_VIEW_NUMBER: u64 = 1;
pub const DEFAULT_TARGET_STATUS: &str = "In review";
pub const DEFAULT_STATUS_FIELD_NAME: &str = "Status";

/// Field consulted for a display name when the item content has no title.
pub const TITLE_FIELD_NAME: &str = "Title";
pub const UNTITLED_ITEM: &str = "Untitled item";
pub const UNASSIGNED: &str = "Unassigned";
pub const ATTACHMENT_COLOR: &str = "warning";

// Page sizes. Anything past these is silently dropped by the API.
pub const MAX_PROJECTS: u32 = 100;
pub const MAX_ITEMS: u32 = 100;
pub const MAX_FIELD_VALUES: u32 = 10;
pub const MAX_ASSIGNEES: u32 = 10;

pub const PROJECT_LOOKUP_QUERY: &str = r#"
    query($owner: String!, $first: Int!) {
        user(login: $owner) {
            projectsV2(first: $first) {
                nodes {
                    id
                    number
                    title
                }
            }
        }
        organization(login: $owner) {
            projectsV2(first: $first) {
                nodes {
                    id
                    number
                    title
                }
            }
        }
    }
"#;

const ASSIGNEE_FIELDS: &str = r#"
    assignees(first: $assignees) {
        nodes {
            login
            name
        }
    }
"#;

/// Builds the item query. `$assignees` is a variable so the fragment can be
/// shared across the three content types.
pub fn project_items_query() -> String {
    format!(
        r#"
    query($projectId: ID!, $first: Int!, $fieldValues: Int!, $assignees: Int!) {{
        node(id: $projectId) {{
            ... on ProjectV2 {{
                items(first: $first) {{
                    nodes {{
                        id
                        content {{
                            __typename
                            ... on Issue {{
                                title
                                url
                                {assignees}
                            }}
                            ... on PullRequest {{
                                title
                                url
                                {assignees}
                            }}
                            ... on DraftIssue {{
                                title
                                {assignees}
                            }}
                        }}
                        fieldValues(first: $fieldValues) {{
                            nodes {{
                                __typename
                                ... on ProjectV2ItemFieldSingleSelectValue {{
                                    field {{
                                        ... on ProjectV2SingleSelectField {{
                                            name
                                        }}
                                    }}
                                    name
                                }}
                                ... on ProjectV2ItemFieldTextValue {{
                                    field {{
                                        ... on ProjectV2Field {{
                                            name
                                        }}
                                    }}
                                    text
                                }}
                            }}
                        }}
                    }}
                }}
            }}
        }}
    }}
"#,
        assignees = ASSIGNEE_FIELDS
    )
}
