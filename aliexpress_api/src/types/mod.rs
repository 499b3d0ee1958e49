pub mod de;

mod affiliate;
pub use self::affiliate::{
    AffiliateLink, AffiliateOrder, Category, CategoryList, LinkGenerateResult, OrderPage,
};

mod product;
pub use self::product::{Product, ProductPage};

mod logistics;
pub use self::logistics::{BuyerFreightResult, FreightOption};

mod dropshipping;
pub use self::dropshipping::{
    Amount, AttributeBag, ChildOrder, DeliveryOption, DsCategory, DsCategoryList,
    DsCommissionOrder, DsCommissionOrderPage, DsFeedItemIds, DsFreightResult,
    DsImageSearchResult, DsOrder, DsOrderCreateResult, DsOrderPage, DsOrderProduct,
    DsOrderTracking, DsOrderTrackingData, DsProduct, DsSearchProduct, DsTextSearchResult,
    DsTradeOrder, ItemBaseInfo, ItemProperty, LogisticsInfo, ManufacturerInfo, MultimediaInfo,
    OrderLogisticsInfo, PackageInfo, PackageTracking, ProductIdConverterResult, SkuInfo,
    SkuProperty, StoreInfo, TrackingEvent, Video, WholesalePriceTier,
};

mod token;
pub use self::token::TokenResponse;
