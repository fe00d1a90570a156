//! GraphQL query documents sent to the LeetCode endpoint.
//!
//! The documents are sent verbatim; field selections must stay in sync with the
//! response models in [`super::models`].

use super::Operation;

/// Original-language question content.
pub const QUESTION_CONTENT: Operation = Operation {
    name: "questionContent",
    document: r"query questionContent($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    content
    editorType
    mysqlSchemas
    dataSchemas
  }
}
",
};

/// Translated (zh-CN) question title and content.
pub const QUESTION_TRANSLATIONS: Operation = Operation {
    name: "questionTranslations",
    document: r"query questionTranslations($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    translatedTitle
    translatedContent
  }
}
",
};

/// Keyword-searched, paginated problem set listing.
pub const PROBLEMSET_QUESTION_LIST: Operation = Operation {
    name: "problemsetQuestionListV2",
    document: r"query problemsetQuestionListV2($filters: QuestionFilterInput, $limit: Int, $searchKeyword: String, $skip: Int, $sortBy: QuestionSortByInput, $categorySlug: String) {
  problemsetQuestionListV2(
    filters: $filters
    limit: $limit
    searchKeyword: $searchKeyword
    skip: $skip
    sortBy: $sortBy
    categorySlug: $categorySlug
  ) {
    questions {
      id
      titleSlug
      title
      translatedTitle
      questionFrontendId
      paidOnly
      difficulty
      topicTags {
        name
        slug
        nameTranslated
      }
      status
      isInMyFavorites
      frequency
      acRate
      contestPoint
    }
    totalLength
    finishedLength
    hasMore
  }
}
",
};

/// Solution article listing for a question, filterable by author search text.
pub const QUESTION_TOPICS_LIST: Operation = Operation {
    name: "questionTopicsList",
    document: r"query questionTopicsList($questionSlug: String!, $skip: Int, $first: Int, $orderBy: SolutionArticleOrderBy, $userInput: String, $tagSlugs: [String!]) {
  questionSolutionArticles(
    questionSlug: $questionSlug
    skip: $skip
    first: $first
    orderBy: $orderBy
    userInput: $userInput
    tagSlugs: $tagSlugs
  ) {
    totalNum
    edges {
      node {
        rewardEnabled
        canEditReward
        uuid
        title
        slug
        sunk
        chargeType
        status
        identifier
        canEdit
        canSee
        reactionType
        hasVideo
        favoriteCount
        upvoteCount
        reactionsV2 {
          count
          reactionType
        }
        tags {
          name
          nameTranslated
          slug
          tagType
        }
        createdAt
        thumbnail
        author {
          username
          certificationLevel
          profile {
            userAvatar
            userSlug
            realName
            reputation
          }
        }
        summary
        topic {
          id
          commentCount
          viewCount
          pinned
        }
        byLeetcode
        isMyFavorite
        isMostPopular
        isEditorsPick
        hitCount
        videosInfo {
          videoId
          coverUrl
          duration
        }
      }
    }
  }
}
",
};

/// Full solution article by slug.
pub const DISCUSS_TOPIC: Operation = Operation {
    name: "discussTopic",
    document: r"query discussTopic($slug: String) {
  solutionArticle(slug: $slug, orderBy: DEFAULT) {
    ...solutionArticle
    content
    next {
      slug
      title
    }
    prev {
      slug
      title
    }
  }
}

fragment solutionArticle on SolutionArticleNode {
  ipRegion
  rewardEnabled
  canEditReward
  uuid
  title
  content
  slateValue
  slug
  sunk
  chargeType
  status
  identifier
  canEdit
  canSee
  reactionType
  reactionsV2 {
    count
    reactionType
  }
  tags {
    name
    nameTranslated
    slug
    tagType
  }
  createdAt
  thumbnail
  author {
    username
    certificationLevel
    isDiscussAdmin
    isDiscussStaff
    profile {
      userAvatar
      userSlug
      realName
      reputation
    }
  }
  summary
  topic {
    id
    subscribed
    commentCount
    viewCount
    post {
      id
      status
      voteStatus
      isOwnPost
    }
  }
  byLeetcode
  isMyFavorite
  isMostPopular
  favoriteCount
  isEditorsPick
  hitCount
  videosInfo {
    videoId
    coverUrl
    duration
  }
  question {
    titleSlug
    questionFrontendId
  }
}
",
};
