use super::*;

#[test]
fn user_profile_defaults_missing_avatar_to_none() {
    let user: UserProfile =
        serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "Ana",
            "email": "a@b.com"
        }))
        .unwrap();
    assert_eq!(user.avatar, None);
}

#[test]
fn session_response_decodes_user_and_token() {
    let resp: SessionResponse = serde_json::from_value(serde_json::json!({
        "user": { "id": "1", "name": "Ana", "email": "a@b.com", "avatar": null },
        "token": "tok123"
    }))
    .unwrap();
    assert_eq!(resp.user.name, "Ana");
    assert_eq!(resp.token, "tok123");
}

#[test]
fn exercise_decodes_backend_payload() {
    let exercise: Exercise = serde_json::from_value(serde_json::json!({
        "id": "7",
        "name": "Front pulldown",
        "group": "back",
        "series": 3,
        "repetitions": "12",
        "demo": "pulldown.gif",
        "thumb": "pulldown.png"
    }))
    .unwrap();
    assert_eq!(exercise.series, 3);
    assert_eq!(exercise.repetitions, "12");
}

#[test]
fn history_decodes_day_sections() {
    let days: Vec<HistoryDay> = serde_json::from_value(serde_json::json!([
        {
            "title": "22.07.24",
            "data": [
                {
                    "id": "h-1",
                    "name": "Front pulldown",
                    "group": "back",
                    "hour": "08:12",
                    "created_at": "2024-07-22T08:12:00.000Z"
                }
            ]
        }
    ]))
    .unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].data[0].hour, "08:12");
}
