use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::database::Database;
use crate::models::*;

/// Study-group aggregate operations. The group owns its members, resources,
/// messages and summaries; children never outlive the group. Message
/// delivery to live readers is an external collaborator's concern.
#[derive(Clone)]
pub struct GroupService {
    db: Database,
}

impl GroupService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create the group with its owner enrolled as the first member.
    pub async fn create_group(&self, request: CreateGroupRequest) -> Result<StudyGroup> {
        if request.name.trim().is_empty() {
            return Err(anyhow::anyhow!("Group name is required"));
        }

        let group = StudyGroup {
            id: Uuid::new_v4(),
            name: request.name,
            description: request.description.unwrap_or_default(),
            owner_id: request.owner_id.clone(),
            member_count: 0,
            created_at: Utc::now(),
            members: None,
            resources: None,
            messages: None,
            summaries: None,
        };

        self.db.create_group(&group).await?;

        let owner = GroupMember {
            id: Uuid::new_v4(),
            group_id: group.id,
            user_id: request.owner_id,
            display_name: request.owner_display_name,
            role: "owner".to_string(),
            joined_at: Utc::now(),
        };
        self.db.add_member(&owner).await?;

        // Re-read so the returned record carries the updated member count.
        self.db
            .get_group(group.id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Group disappeared during creation"))
    }

    pub async fn list_groups(&self) -> Result<Vec<StudyGroup>> {
        self.db.list_groups().await
    }

    /// Fetch a group with all nested collections hydrated.
    pub async fn get_group(&self, id: Uuid) -> Result<Option<StudyGroup>> {
        let mut group = match self.db.get_group(id).await? {
            Some(group) => group,
            None => return Ok(None),
        };

        group.members = Some(self.db.list_members(id).await?);
        group.resources = Some(self.db.list_resources(id).await?);
        group.messages = Some(self.db.list_messages(id).await?);
        group.summaries = Some(self.db.list_summaries(id).await?);

        Ok(Some(group))
    }

    pub async fn delete_group(&self, id: Uuid) -> Result<bool> {
        self.db.delete_group(id).await
    }

    pub async fn add_member(
        &self,
        group_id: Uuid,
        request: AddMemberRequest,
    ) -> Result<Option<GroupMember>> {
        if self.db.get_group(group_id).await?.is_none() {
            return Ok(None);
        }

        let member = GroupMember {
            id: Uuid::new_v4(),
            group_id,
            user_id: request.user_id,
            display_name: request.display_name,
            role: "member".to_string(),
            joined_at: Utc::now(),
        };

        self.db.add_member(&member).await?;
        Ok(Some(member))
    }

    pub async fn add_resource(
        &self,
        group_id: Uuid,
        request: AddResourceRequest,
    ) -> Result<Option<GroupResource>> {
        if self.db.get_group(group_id).await?.is_none() {
            return Ok(None);
        }

        let resource = GroupResource {
            id: Uuid::new_v4(),
            group_id,
            title: request.title,
            url: request.url,
            added_by: request.added_by,
            created_at: Utc::now(),
        };

        self.db.add_resource(&resource).await?;
        Ok(Some(resource))
    }

    pub async fn post_message(
        &self,
        group_id: Uuid,
        request: PostMessageRequest,
    ) -> Result<Option<GroupMessage>> {
        if request.content.trim().is_empty() {
            return Err(anyhow::anyhow!("Message content is required"));
        }
        if self.db.get_group(group_id).await?.is_none() {
            return Ok(None);
        }

        let message = GroupMessage {
            id: Uuid::new_v4(),
            group_id,
            sender_id: request.sender_id,
            content: request.content,
            sent_at: Utc::now(),
        };

        self.db.add_message(&message).await?;
        Ok(Some(message))
    }

    pub async fn list_messages(&self, group_id: Uuid) -> Result<Option<Vec<GroupMessage>>> {
        if self.db.get_group(group_id).await?.is_none() {
            return Ok(None);
        }

        Ok(Some(self.db.list_messages(group_id).await?))
    }

    pub async fn add_summary(
        &self,
        group_id: Uuid,
        request: AddSummaryRequest,
    ) -> Result<Option<GroupSummary>> {
        if self.db.get_group(group_id).await?.is_none() {
            return Ok(None);
        }

        let summary = GroupSummary {
            id: Uuid::new_v4(),
            group_id,
            content: request.content,
            created_at: Utc::now(),
        };

        self.db.add_summary(&summary).await?;
        Ok(Some(summary))
    }
}
